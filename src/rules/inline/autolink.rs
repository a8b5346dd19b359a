//! `<scheme://...>` wrapped URL: a link whose display text equals the URL.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

static AUTOLINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([a-zA-Z][a-zA-Z0-9+.-]*://[^<>\s]*)>").expect("static autolink regex is valid")
});

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let caps = AUTOLINK_RE.captures(remaining)?;
    let whole = caps.get(0)?;
    let url = caps.get(1)?.as_str().to_string();
    Some(Capture::new(whole.end(), CaptureData::Autolink { url }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Autolink { url } = capture.data else { unreachable!() };
    vec![Node::Link { content: vec![Node::text(url.clone())], target: url, title: None }]
}

pub fn rule() -> Rule {
    Rule {
        name: "autolink",
        order: 10,
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
        let capture = matcher("<http://example.com> rest", Mode::Inline, None).unwrap();
        let CaptureData::Autolink { url } = &capture.data else { panic!() };
        assert_eq!(url, "http://example.com");
    }

    #[test]
    fn smoke_test_rejects_non_scheme() {
        assert!(matcher("<not a url>", Mode::Inline, None).is_none());
    }
}
