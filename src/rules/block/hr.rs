//! Thematic break: a line of three or more `-`, `*`, or `_`, optionally
//! separated by spaces.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::take_line;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (line, consumed) = take_line(remaining);
    let trimmed = line.trim();
    if trimmed.len() < 3 {
        return None;
    }
    let marker_count = |ch: char| trimmed.chars().all(|c| c == ch || c == ' ') && trimmed.chars().filter(|&c| c == ch).count() >= 3;
    if marker_count('-') || marker_count('*') || marker_count('_') {
        Some(Capture::new(consumed, CaptureData::Hr))
    } else {
        None
    }
}

fn transform(_capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    vec![Node::Hr]
}

pub fn rule() -> Rule {
    Rule {
        name: "hr",
        order: 30,
        modes: &[Mode::Block],
        matcher,
        quality: None,
        transform,
    }
}
