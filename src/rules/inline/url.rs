//! Freeform bare `http(s)://...` token inside running text. Trailing
//! punctuation is not consumed as part of the URL.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"', ')', ']'];

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let prefix_len = if remaining.starts_with("https://") {
        8
    } else if remaining.starts_with("http://") {
        7
    } else {
        return None;
    };

    let token_len = remaining[prefix_len..]
        .find(|c: char| c.is_whitespace() || c == '<' || c == '>')
        .map(|i| prefix_len + i)
        .unwrap_or(remaining.len());

    let mut end = token_len;
    while end > prefix_len && remaining[..end].ends_with(TRAILING_PUNCTUATION) {
        end -= 1;
    }
    if end <= prefix_len {
        return None;
    }

    let url = remaining[..end].to_string();
    Some(Capture::new(end, CaptureData::Url { url }))
}

fn transform(capture: Capture, _recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Url { url } = capture.data else { unreachable!() };
    vec![Node::Link { content: vec![Node::text(url.clone())], target: url, title: None }]
}

pub fn rule() -> Rule {
    Rule {
        name: "url",
        order: 55,
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
    fn smoke_test_matches_bare_url() {
        let capture = matcher("http://example.com rest", Mode::Inline, None).unwrap();
        let CaptureData::Url { url } = &capture.data else { panic!() };
        assert_eq!(url, "http://example.com");
    }

    #[test]
    fn smoke_test_trailing_punctuation_not_consumed() {
        let capture = matcher("http://example.com.", Mode::Inline, None).unwrap();
        let CaptureData::Url { url } = &capture.data else { panic!() };
        assert_eq!(url, "http://example.com");
    }
}
