//! Indented code block: contiguous lines each prefixed with four spaces.
//! Trailing whitespace-only lines are stripped; `lang` is always absent.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::take_line;

const INDENT: &str = "    ";

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    if !remaining.starts_with(INDENT) {
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
        if let Some(content) = line.strip_prefix(INDENT) {
            lines.push(content);
            offset += consumed;
        } else if line.trim().is_empty() {
            lines.push("");
            offset += consumed;
        } else {
            break;
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return None;
    }

    let mut body = lines.join("\n");
    body.push('\n');
    Some(Capture::new(offset, CaptureData::CodeBlock { body }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::CodeBlock { body } = capture.data else { unreachable!() };
    vec![Node::CodeBlock { lang: None, content: body }]
}

pub fn rule() -> Rule {
    Rule {
        name: "code_block",
        order: 20,
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
    fn smoke_test_single_line() {
        let capture = matcher("    let x = 1;\n\nrest", Mode::Block, None).unwrap();
        let CaptureData::CodeBlock { body } = &capture.data else { panic!() };
        assert_eq!(body, "let x = 1;\n");
    }

    #[test]
    fn smoke_test_strips_trailing_blank_lines() {
        let capture = matcher("    a\n    \n    b\n\nrest", Mode::Block, None).unwrap();
        let CaptureData::CodeBlock { body } = &capture.data else { panic!() };
        assert_eq!(body, "a\n\nb\n");
    }

    #[test]
    fn smoke_test_rejects_unindented() {
        assert!(matcher("not indented", Mode::Block, None).is_none());
    }
}
