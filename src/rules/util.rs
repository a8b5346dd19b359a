//! Small text-scanning helpers shared by several block rules. Kept separate
//! from `rule.rs` because these are implementation details of specific
//! rules, not part of the engine's public vocabulary.

/// Splits off the first line of `s`, returning `(line_without_terminator,
/// bytes_consumed_including_terminator)`. At EOF with no trailing newline,
/// consumes the remainder with no terminator.
pub fn take_line(s: &str) -> (&str, usize) {
    match s.find('\n') {
        Some(idx) => (&s[..idx], idx + 1),
        None => (s, s.len()),
    }
}

pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Scans one or more non-blank lines (the paragraph body), stopping at a
/// blank line or EOF. Returns `(body, consumed)` where `consumed` also
/// swallows exactly one trailing blank-line separator, if present. Returns
/// `None` if the very first line is blank (nothing to capture).
pub fn paragraph_span(s: &str) -> Option<(&str, usize)> {
    let mut offset = 0;
    let mut saw_line = false;

    loop {
        let (line, consumed) = take_line(&s[offset..]);
        if is_blank_line(line) {
            break;
        }
        saw_line = true;
        offset += consumed;
        if consumed == line.len() {
            // reached EOF without a terminating newline
            break;
        }
    }

    if !saw_line {
        return None;
    }

    let body_end = offset.saturating_sub(if s[..offset].ends_with('\n') { 1 } else { 0 });
    let body = &s[..body_end];

    // swallow exactly one trailing blank-line separator
    let mut consumed = offset;
    if consumed < s.len() {
        let (blank, blank_consumed) = take_line(&s[consumed..]);
        if is_blank_line(blank) {
            consumed += blank_consumed;
        }
    }

    Some((body, consumed))
}
