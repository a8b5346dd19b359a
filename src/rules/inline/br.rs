//! Hard line break: two or more trailing spaces before a newline.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let spaces = remaining.chars().take_while(|&c| c == ' ').count();
    if spaces < 2 {
        return None;
    }
    if remaining[spaces..].starts_with('\n') {
        Some(Capture::new(spaces + 1, CaptureData::Br))
    } else {
        None
    }
}

fn transform(_capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    vec![Node::Br]
}

pub fn rule() -> Rule {
    Rule {
        name: "br",
        order: 20,
        modes: &[Mode::Inline],
        matcher,
        quality: None,
        transform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_two_spaces_and_newline() {
        let capture = matcher("  \nrest", Mode::Inline, None).unwrap();
        assert_eq!(capture.consumed, 3);
    }

    #[test]
    fn smoke_test_one_space_does_not_break() {
        assert!(matcher(" \nrest", Mode::Inline, None).is_none());
    }

    #[test]
    fn smoke_test_spaces_without_newline_do_not_break() {
        assert!(matcher("   rest", Mode::Inline, None).is_none());
    }
}
