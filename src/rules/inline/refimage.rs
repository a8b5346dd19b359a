//! `![alt][label]` — the image analogue of `reflink`.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let rest = remaining.strip_prefix("![")?;
    let first_close = rest.find(']')?;
    let alt = &rest[..first_close];
    let after = &rest[first_close + 1..];
    let rest2 = after.strip_prefix('[')?;
    let second_close = rest2.find(']')?;
    let label_raw = &rest2[..second_close];
    let label = if label_raw.is_empty() { alt } else { label_raw };

    let consumed = 2 + first_close + 1 + 1 + second_close + 1;
    Some(Capture::new(
        consumed,
        CaptureData::Refimage {
            alt: alt.to_string(),
            label: label.to_string(),
            raw: remaining[..consumed].to_string(),
        },
    ))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Refimage { alt, label, raw } = capture.data else { unreachable!() };
    match recurse.refs.get(&label).cloned() {
        Some(def) => vec![Node::Image { alt, target: def.target, title: def.title }],
        None => raw.chars().map(|c| Node::text(c.to_string())).collect(),
    }
}

pub fn rule() -> Rule {
    Rule {
        name: "refimage",
        order: 26,
        modes: &[Mode::Inline, Mode::SimpleInline],
        matcher,
        quality: None,
        transform,
    }
}
