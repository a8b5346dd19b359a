//! `[text][label]` or `[text][]` (implicit label = text). Resolved against
//! the ref table; an unresolved label falls back to emitting the literal
//! bracketed characters as separate text nodes.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let rest = remaining.strip_prefix('[')?;
    let first_close = rest.find(']')?;
    let text = &rest[..first_close];
    let after = &rest[first_close + 1..];
    let rest2 = after.strip_prefix('[')?;
    let second_close = rest2.find(']')?;
    let label_raw = &rest2[..second_close];
    let label = if label_raw.is_empty() { text } else { label_raw };

    let consumed = 1 + first_close + 1 + 1 + second_close + 1;
    Some(Capture::new(
        consumed,
        CaptureData::Reflink {
            text: text.to_string(),
            label: label.to_string(),
            raw: remaining[..consumed].to_string(),
        },
    ))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Reflink { text, label, raw } = capture.data else { unreachable!() };
    match recurse.refs.get(&label).cloned() {
        Some(def) => {
            let content = recurse.run(&text, Mode::SimpleInline);
            vec![Node::Link { content, target: def.target, title: def.title }]
        }
        None => raw.chars().map(|c| Node::text(c.to_string())).collect(),
    }
}

pub fn rule() -> Rule {
    Rule {
        name: "reflink",
        order: 36,
        modes: &[Mode::Inline, Mode::SimpleInline],
        matcher,
        quality: None,
        transform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reftable::RefTable;
    use crate::engine::Engine;

    fn test_engine() -> Engine {
        Engine { block_rules: vec![], inline_rules: vec![rule()], simple_inline_rules: vec![] }
    }

    #[test]
    fn smoke_test_captures_explicit_label() {
        let capture = matcher("[Google][HiIiI] rest", Mode::Inline, None).unwrap();
        let CaptureData::Reflink { text, label, .. } = &capture.data else { panic!() };
        assert_eq!(text, "Google");
        assert_eq!(label, "HiIiI");
    }

    #[test]
    fn smoke_test_implicit_label_is_text() {
        let capture = matcher("[test][]", Mode::Inline, None).unwrap();
        let CaptureData::Reflink { label, .. } = &capture.data else { panic!() };
        assert_eq!(label, "test");
    }

    #[test]
    fn smoke_test_unresolved_falls_back_to_literal_text() {
        let engine = test_engine();
        let mut refs = RefTable::new();
        let capture = matcher("[x][missing]", Mode::Inline, None).unwrap();
        let mut recurse = crate::rule::Recurse { engine: &engine, refs: &mut refs };
        let nodes = transform(capture, &mut recurse);
        assert_eq!(nodes.len(), "[x][missing]".chars().count());
    }
}
