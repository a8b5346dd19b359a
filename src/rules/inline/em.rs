//! `*...*` (or `_..._`) delimited span.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::inline::util::match_delimited;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let delim = if remaining.starts_with('_') { "_" } else { "*" };
    let (inner, consumed) = match_delimited(remaining, delim)?;
    Some(Capture::new(consumed, CaptureData::Em { body: inner.to_string() }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Em { body } = capture.data else { unreachable!() };
    let content = recurse.run(&body, Mode::SimpleInline);
    vec![Node::Em { content }]
}

pub fn rule() -> Rule {
    Rule {
        name: "em",
        order: 45,
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
    fn smoke_test_star_delim() {
        let capture = matcher("*hi* rest", Mode::Inline, None).unwrap();
        assert_eq!(capture.consumed, "*hi*".len());
    }

    #[test]
    fn smoke_test_underscore_delim() {
        let capture = matcher("_hi_ rest", Mode::Inline, None).unwrap();
        assert_eq!(capture.consumed, "_hi_".len());
    }
}
