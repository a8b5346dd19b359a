//! Block quote: contiguous lines prefixed with `>` (optionally followed by
//! one space). The prefix is stripped and the remainder parsed in block
//! mode.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::take_line;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    if !remaining.starts_with('>') {
        return None;
    }

    let mut offset = 0;
    let mut lines = Vec::new();
    loop {
        let rest = &remaining[offset..];
        if rest.is_empty() {
            break;
        }
        let (line, consumed) = take_line(rest);
        if let Some(after) = line.strip_prefix('>') {
            let stripped = after.strip_prefix(' ').unwrap_or(after);
            lines.push(stripped);
            offset += consumed;
        } else if line.trim().is_empty() {
            // a blank line ends the quote unless another `>` line follows
            let next = &remaining[offset + consumed..];
            if next.starts_with('>') {
                lines.push("");
                offset += consumed;
            } else {
                break;
            }
        } else {
            break;
        }
    }

    if lines.is_empty() {
        return None;
    }
    let body = lines.join("\n");
    Some(Capture::new(offset, CaptureData::BlockQuote { body }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::BlockQuote { body } = capture.data else { unreachable!() };
    let content = recurse.run(&body, Mode::Block);
    vec![Node::BlockQuote { content }]
}

pub fn rule() -> Rule {
    Rule {
        name: "blockquote",
        order: 50,
        modes: &[Mode::Block],
        matcher,
        quality: None,
        transform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_strips_prefix() {
        let capture = matcher("> hi\n> there\n\nrest", Mode::Block, None).unwrap();
        let CaptureData::BlockQuote { body } = &capture.data else { panic!() };
        assert_eq!(body, "hi\nthere");
    }

    #[test]
    fn smoke_test_rejects_non_quote() {
        assert!(matcher("not a quote", Mode::Block, None).is_none());
    }
}
