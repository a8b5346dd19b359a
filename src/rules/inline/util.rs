//! Non-greedy delimiter matching shared by the delimited-span rules
//! (strong, em, u, del). A closer is accepted when it is not immediately
//! followed by another instance of the same delimiter character, or when
//! it sits at the absolute end of the string — one rule that explains both
//! CommonMark-style nesting (`***hi***`) and the degenerate `~~~~~` case.

pub fn match_delimited<'a>(s: &'a str, delim: &str) -> Option<(&'a str, usize)> {
    if delim.is_empty() || !s.starts_with(delim) {
        return None;
    }
    let open_len = delim.len();
    let delim_char = delim.chars().next().unwrap();
    let mut search_from = open_len;

    loop {
        let rel = s[search_from..].find(delim)?;
        let close_start = search_from + rel;
        let close_end = close_start + open_len;
        let followed_by_same = s[close_end..].starts_with(delim_char);
        if !followed_by_same {
            return Some((&s[open_len..close_start], close_end));
        }
        search_from = close_start + delim_char.len_utf8();
    }
}

/// Parses the `(target "title"?)` tail of a link/image, starting just
/// after the opening `(`. Returns `(target, title, bytes_consumed)` where
/// `bytes_consumed` includes the closing `)`.
pub fn parse_link_tail(s: &str) -> Option<(String, Option<String>, usize)> {
    let mut i;
    let target;
    if let Some(rest) = s.strip_prefix('<') {
        let end = rest.find('>')?;
        target = rest[..end].to_string();
        i = 1 + end + 1;
    } else {
        let end = s.find(|c: char| c.is_whitespace() || c == ')')?;
        target = s[..end].to_string();
        i = end;
    }

    while s[i..].starts_with(' ') {
        i += 1;
    }

    let mut title = None;
    if let Some(rest) = s[i..].strip_prefix('"') {
        let end = rest.find('"')?;
        title = Some(rest[..end].to_string());
        i += 1 + end + 1;
    }

    while s[i..].starts_with(' ') {
        i += 1;
    }
    if !s[i..].starts_with(')') {
        return None;
    }
    i += 1;

    Some((target, title, i))
}
