//! `__...__` delimited span — a literal double-underscore node, distinct
//! from `em`.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::inline::util::match_delimited;

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (inner, consumed) = match_delimited(remaining, "__")?;
    Some(Capture::new(consumed, CaptureData::U { body: inner.to_string() }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::U { body } = capture.data else { unreachable!() };
    let content = recurse.run(&body, Mode::SimpleInline);
    vec![Node::U { content }]
}

pub fn rule() -> Rule {
    Rule {
        name: "u",
        order: 42,
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
        let capture = matcher("__under__ rest", Mode::Inline, None).unwrap();
        assert_eq!(capture.consumed, "__under__".len());
    }
}
