//! `**...**` delimited span.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::inline::util::match_delimited;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (inner, consumed) = match_delimited(remaining, "**")?;
    Some(Capture::new(consumed, CaptureData::Strong { body: inner.to_string() }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Strong { body } = capture.data else { unreachable!() };
    let content = recurse.run(&body, Mode::SimpleInline);
    vec![Node::Strong { content }]
}

pub fn rule() -> Rule {
    Rule {
        name: "strong",
        order: 40,
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
        let capture = matcher("**bold** rest", Mode::Inline, None).unwrap();
        assert_eq!(capture.consumed, "**bold**".len());
    }
}
