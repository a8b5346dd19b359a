//! Setext heading: a text line followed by an underline of three or more
//! `=` (level 1) or `-` (level 2). Two or fewer underline characters do not
//! qualify.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::{is_blank_line, take_line};

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (line, line_consumed) = take_line(remaining);
    if is_blank_line(line) {
        return None;
    }
    let after_line = &remaining[line_consumed..];
    let (underline, underline_consumed) = take_line(after_line);
    let trimmed = underline.trim();
    if trimmed.len() < 3 {
        return None;
    }
    let level = if trimmed.chars().all(|c| c == '=') {
        1
    } else if trimmed.chars().all(|c| c == '-') {
        2
    } else {
        return None;
    };

    Some(Capture::new(
        line_consumed + underline_consumed,
        CaptureData::Lheading { level, body: line.to_string() },
    ))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Lheading { level, body } = capture.data else { unreachable!() };
    let content = recurse.run(&body, Mode::SimpleInline);
    vec![Node::Heading { level, content }]
}

pub fn rule() -> Rule {
    Rule {
        name: "lheading",
        order: 45,
        modes: &[Mode::Block],
        matcher,
        quality: None,
        transform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_level_one_equals() {
        let capture = matcher("Title\n===\n\nrest", Mode::Block, None).unwrap();
        let CaptureData::Lheading { level, body } = &capture.data else { panic!() };
        assert_eq!(*level, 1);
        assert_eq!(body, "Title");
    }

    #[test]
    fn smoke_test_level_two_dashes() {
        let capture = matcher("Title\n---\n", Mode::Block, None).unwrap();
        let CaptureData::Lheading { level, .. } = &capture.data else { panic!() };
        assert_eq!(*level, 2);
    }

    #[test]
    fn smoke_test_two_char_underline_rejected() {
        assert!(matcher("Title\n--\n", Mode::Block, None).is_none());
    }
}
