//! `~~...~~` delimited span. `~~~~~` degenerates to `del` around a single
//! `~`, which falls out of the shared non-greedy matcher without a special
//! case.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::inline::util::match_delimited;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (inner, consumed) = match_delimited(remaining, "~~")?;
    Some(Capture::new(consumed, CaptureData::Del { body: inner.to_string() }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Del { body } = capture.data else { unreachable!() };
    let content = recurse.run(&body, Mode::SimpleInline);
    vec![Node::Del { content }]
}

pub fn rule() -> Rule {
    Rule {
        name: "del",
        order: 50,
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
        let capture = matcher("~~gone~~ rest", Mode::Inline, None).unwrap();
        assert_eq!(capture.consumed, "~~gone~~".len());
    }

    #[test]
    fn smoke_test_degenerate_tildes() {
        let capture = matcher("~~~~~", Mode::Inline, None).unwrap();
        let CaptureData::Del { body } = &capture.data else { panic!() };
        assert_eq!(body, "~");
    }
}
