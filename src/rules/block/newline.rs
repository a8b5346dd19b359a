//! Consumes a single blank-line separator.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    if remaining.starts_with('\n') {
        Some(Capture::new(1, CaptureData::Newline))
    } else {
        None
    }
}

fn transform(_capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    Vec::new()
}

pub fn rule() -> Rule {
    Rule {
        name: "newline",
        order: 0,
        modes: &[Mode::Block],
        matcher,
        quality: None,
        transform,
    }
}
