//! Link reference definition: `[label]: target "title"?` on a single line.
//! A malformed candidate falls back to paragraph text rather than erroring.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::take_line;

static DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\[([^\]]+)\]:\s*(?:<([^>]*)>|(\S+))(?:\s+(?:"([^"]*)"|\(([^)]*)\)))?\s*$"#)
        .expect("static def regex is valid")
});

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (line, consumed) = take_line(remaining);
    let caps = DEF_RE.captures(line)?;
    let label = caps.get(1)?.as_str().to_string();
    let target = caps
        .get(2)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let title = caps.get(4).or_else(|| caps.get(5)).map(|m| m.as_str().to_string());

    Some(Capture::new(consumed, CaptureData::Def { label, target, title }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Def { label, target, title } = capture.data else { unreachable!() };
    vec![Node::Def {
        def: crate::reftable::normalize(&label),
        target,
        title,
    }]
}

pub fn rule() -> Rule {
    Rule {
        name: "def",
        order: 70,
        modes: &[Mode::Block],
        matcher,
        quality: None,
        transform,
    }
}
