//! `\X` for X in the fixed punctuation set. Every escape produces its own
//! text node — escapes are never merged with surrounding text.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

const ESCAPABLE: &str = "`*~|<[{^\\_";

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let mut chars = remaining.chars();
    if chars.next()? != '\\' {
        return None;
    }
    let ch = chars.next()?;
    if !ESCAPABLE.contains(ch) {
        return None;
    }
    Some(Capture::new(1 + ch.len_utf8(), CaptureData::Escape { ch }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Escape { ch } = capture.data else { unreachable!() };
    vec![Node::text(ch.to_string())]
}

pub fn rule() -> Rule {
    Rule {
        name: "escape",
        order: 0,
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
    fn smoke_test_escapes_each_special_char() {
        for ch in ESCAPABLE.chars() {
            let input = format!("\\{ch}rest");
            let capture = matcher(&input, Mode::Inline, None).unwrap();
            let CaptureData::Escape { ch: captured } = &capture.data else { panic!() };
            assert_eq!(*captured, ch);
        }
    }

    #[test]
    fn smoke_test_rejects_non_escapable() {
        assert!(matcher("\\a", Mode::Inline, None).is_none());
    }
}
