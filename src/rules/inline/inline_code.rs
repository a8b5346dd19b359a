//! Backtick-delimited literal text. Content is never recursed into:
//! emphasis markers inside are not interpreted.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::inline::util::match_delimited;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (inner, consumed) = match_delimited(remaining, "`")?;
    Some(Capture::new(consumed, CaptureData::InlineCode { body: inner.to_string() }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::InlineCode { body } = capture.data else { unreachable!() };
    vec![Node::InlineCode { content: body }]
}

pub fn rule() -> Rule {
    Rule {
        name: "inline_code",
        order: 5,
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
        let capture = matcher("`code` rest", Mode::Inline, None).unwrap();
        let CaptureData::InlineCode { body } = &capture.data else { panic!() };
        assert_eq!(body, "code");
    }

    #[test]
    fn smoke_test_markers_not_interpreted() {
        let capture = matcher("`*not em*` rest", Mode::Inline, None).unwrap();
        let CaptureData::InlineCode { body } = &capture.data else { panic!() };
        assert_eq!(body, "*not em*");
    }
}
