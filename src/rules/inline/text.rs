//! Fallback rule: captures the longest prefix that does not begin any
//! other inline rule. Always matches (non-empty remainder is guaranteed by
//! the engine), so it must be tried last.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

fn starts_special(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if s.starts_with(['\\', '<', '[', '`', '~']) {
        return true;
    }
    if s.starts_with("![") {
        return true;
    }
    if s.starts_with(['*', '_']) {
        return true;
    }
    if s.starts_with("http://") || s.starts_with("https://") {
        return true;
    }
    let spaces = s.chars().take_while(|&c| c == ' ').count();
    if spaces >= 2 && s[spaces..].starts_with('\n') {
        return true;
    }
    false
}

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    if remaining.is_empty() {
        return None;
    }
    let mut consumed = remaining.len();
    for (idx, _) in remaining.char_indices().skip(1) {
        if starts_special(&remaining[idx..]) {
            consumed = idx;
            break;
        }
    }
    Some(Capture::new(consumed, CaptureData::Text { content: remaining[..consumed].to_string() }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Text { content } = capture.data else { unreachable!() };
    vec![Node::text(content)]
}

pub fn rule() -> Rule {
    Rule {
        name: "text",
        order: 1000,
        modes: &[Mode::Inline, Mode::SimpleInline],
        matcher,
        quality: None,
        transform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_plain_text() {
        let capture = matcher("hi there", Mode::Inline, None).unwrap();
        let CaptureData::Text { content } = &capture.data else { panic!() };
        assert_eq!(content, "hi there");
    }

    #[test]
    fn smoke_test_stops_before_special_char() {
        let capture = matcher("hi *there*", Mode::Inline, None).unwrap();
        let CaptureData::Text { content } = &capture.data else { panic!() };
        assert_eq!(content, "hi ");
    }
}
