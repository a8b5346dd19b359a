//! The catch-all block rule: one or more non-blank lines terminated by a
//! blank line or EOF, parsed in inline mode. Tried last (highest `order`)
//! so every more specific block rule gets first refusal.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::paragraph_span;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (body, consumed) = paragraph_span(remaining)?;
    Some(Capture::new(consumed, CaptureData::Paragraph { body: body.to_string() }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Paragraph { body } = capture.data else { unreachable!() };
    let content = recurse.run(&body, Mode::Inline);
    vec![Node::Paragraph { content }]
}

pub fn rule() -> Rule {
    Rule {
        name: "paragraph",
        order: 1000,
        modes: &[Mode::Block],
        matcher,
        quality: None,
        transform,
    }
}
