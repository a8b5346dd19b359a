//! `![alt](target "title"?)`. `alt` is the raw captured text, not a parsed
//! Node tree.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::inline::util::parse_link_tail;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let rest = remaining.strip_prefix("![")?;
    let bracket_end = rest.find("](")?;
    let alt = &rest[..bracket_end];
    let tail = &rest[bracket_end + 2..];
    let (target, title, tail_consumed) = parse_link_tail(tail)?;

    let consumed = 2 + bracket_end + 2 + tail_consumed;
    Some(Capture::new(consumed, CaptureData::Image { alt: alt.to_string(), target, title }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Image { alt, target, title } = capture.data else { unreachable!() };
    vec![Node::Image { alt, target, title }]
}

pub fn rule() -> Rule {
    Rule {
        name: "image",
        order: 25,
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
    fn smoke_test_matches() {
        let capture = matcher("![alt text](http://a/b.png) rest", Mode::Inline, None).unwrap();
        let CaptureData::Image { alt, target, .. } = &capture.data else { panic!() };
        assert_eq!(alt, "alt text");
        assert_eq!(target, "http://a/b.png");
    }
}
