//! `[text](target "title"?)`. Display text is parsed in `simpleInline` mode.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::inline::util::parse_link_tail;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let rest = remaining.strip_prefix('[')?;
    let bracket_end = rest.find("](")?;
    let text = &rest[..bracket_end];
    let tail = &rest[bracket_end + 2..];
    let (target, title, tail_consumed) = parse_link_tail(tail)?;

    let consumed = 1 + bracket_end + 2 + tail_consumed;
    Some(Capture::new(consumed, CaptureData::Link { text: text.to_string(), target, title }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Link { text, target, title } = capture.data else { unreachable!() };
    let content = recurse.run(&text, Mode::SimpleInline);
    vec![Node::Link { content, target, title }]
}

pub fn rule() -> Rule {
    Rule {
        name: "link",
        order: 30,
        modes: &[Mode::Inline, Mode::SimpleInline],
        matcher,
        quality: None,
        transform,
    }
}
