//! `<addr@host>` or `<mailto:...>`: a link whose target is prefixed
//! `mailto:` exactly once.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

static MAILTO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<(?:mailto:)?([^<>\s@]+@[^<>\s]+)>").expect("static mailto regex is valid"));

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let caps = MAILTO_RE.captures(remaining)?;
    let whole = caps.get(0)?;
    let addr = caps.get(1)?.as_str().to_string();
    Some(Capture::new(
        whole.end(),
        CaptureData::Mailto { display: addr.clone(), target: format!("mailto:{addr}") },
    ))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Mailto { display, target } = capture.data else { unreachable!() };
    vec![Node::Link { content: vec![Node::text(display)], target, title: None }]
}

pub fn rule() -> Rule {
    Rule {
        name: "mailto",
        order: 15,
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
    fn smoke_test_bare_address() {
        let capture = matcher("<a@b.com> rest", Mode::Inline, None).unwrap();
        let CaptureData::Mailto { display, target } = &capture.data else { panic!() };
        assert_eq!(display, "a@b.com");
        assert_eq!(target, "mailto:a@b.com");
    }

    #[test]
    fn smoke_test_explicit_mailto_prefix() {
        let capture = matcher("<mailto:a@b.com>", Mode::Inline, None).unwrap();
        let CaptureData::Mailto { target, .. } = &capture.data else { panic!() };
        assert_eq!(target, "mailto:a@b.com");
    }
}
