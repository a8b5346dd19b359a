//! Fenced code block: a ``` ``` ``` opening line (optional language token),
//! verbatim content, and a closing fence line.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::take_line;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (open_line, open_consumed) = take_line(remaining);
    if !open_line.starts_with("```") {
        return None;
    }
    let lang_token = open_line[3..].trim();
    let lang = if lang_token.is_empty() { None } else { Some(lang_token.to_string()) };

    let mut offset = open_consumed;
    let mut body_lines = Vec::new();
    loop {
        let rest = &remaining[offset..];
        if rest.is_empty() {
            // unterminated fence: everything to EOF is the body
            return Some(Capture::new(
                remaining.len(),
                CaptureData::Fence { lang, body: body_lines.join("\n") },
            ));
        }
        let (line, consumed) = take_line(rest);
        if line.trim_end() == "```" {
            offset += consumed;
            break;
        }
        body_lines.push(line);
        offset += consumed;
    }

    let mut body = body_lines.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    Some(Capture::new(offset, CaptureData::Fence { lang, body }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Fence { lang, body } = capture.data else { unreachable!() };
    vec![Node::CodeBlock { lang, content: body }]
}

pub fn rule() -> Rule {
    Rule {
        name: "fence",
        order: 10,
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
    fn smoke_test_with_language() {
        let capture = matcher("```rust\nfn main() {}\n```\n", Mode::Block, None).unwrap();
        let CaptureData::Fence { lang, body } = &capture.data else { panic!() };
        assert_eq!(lang.as_deref(), Some("rust"));
        assert_eq!(body, "fn main() {}\n");
    }

    #[test]
    fn smoke_test_no_language() {
        let capture = matcher("```\nplain\n```", Mode::Block, None).unwrap();
        let CaptureData::Fence { lang, .. } = &capture.data else { panic!() };
        assert_eq!(*lang, None);
    }

    #[test]
    fn smoke_test_unterminated_runs_to_eof() {
        let capture = matcher("```\nabc", Mode::Block, None).unwrap();
        let CaptureData::Fence { body, .. } = &capture.data else { panic!() };
        assert_eq!(body, "abc");
    }
}
