//! ATX heading: `#{1,6}` at line start. Seven or more `#` clamp to level 6
//! and the excess hash characters become literal leading content.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::take_line;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (line, consumed) = take_line(remaining);
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 {
        return None;
    }
    let rest = &line[hashes..];

    let body = if hashes > 6 {
        let excess = hashes - 6;
        format!("{}{}", "#".repeat(excess), rest)
    } else {
        rest.strip_prefix(' ').unwrap_or(rest).to_string()
    };
    let level = hashes.min(6) as u8;

    Some(Capture::new(consumed, CaptureData::Heading { level, body }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Heading { level, body } = capture.data else { unreachable!() };
    let content = recurse.run(&body, Mode::SimpleInline);
    vec![Node::Heading { level, content }]
}

pub fn rule() -> Rule {
    Rule {
        name: "heading",
        order: 40,
        modes: &[Mode::Block],
        matcher,
        quality: None,
        transform,
    }
}
