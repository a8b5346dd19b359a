//! List: a run of items introduced by `*`/`-`/`+` (unordered) or `<n>.`
//! (ordered) markers, with per-item tight/loose classification and
//! recursive nesting through continuation-line indentation.

use crate::ast::Node;
use crate::rule::{Capture, CaptureData, ListItemRaw, Mode, Recurse, Rule};
use crate::rules::util::take_line;

/// Recognizes a list marker at the start of `line`. Returns
/// `(ordered, start_number, content_start_column)`.
fn match_marker(line: &str) -> Option<(bool, Option<u64>, usize)> {
    let leading = line.chars().take_while(|&c| c == ' ').count();
    if leading > 3 {
        return None;
    }
    let rest = &line[leading..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(c @ ('*' | '-' | '+')) => {
            let after = &rest[c.len_utf8()..];
            let spaces = after.chars().take_while(|&c| c == ' ').count();
            if after.is_empty() {
                return Some((false, None, leading + 1));
            }
            if spaces == 0 {
                return None;
            }
            Some((false, None, leading + 1 + spaces))
        }
        Some(d) if d.is_ascii_digit() => {
            let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
            let after_digits = &rest[digits..];
            let after_dot = after_digits.strip_prefix('.')?;
            let spaces = after_dot.chars().take_while(|&c| c == ' ').count();
            if !after_dot.is_empty() && spaces == 0 {
                return None;
            }
            let num: u64 = rest[..digits].parse().ok()?;
            Some((true, Some(num), leading + digits + 1 + spaces))
        }
        _ => None,
    }
}

fn dedent(line: &str, indent: usize) -> String {
    if line.len() >= indent {
        line[indent..].to_string()
    } else {
        String::new()
    }
}

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < remaining.len() {
        let (line, consumed) = take_line(&remaining[pos..]);
        spans.push((line, consumed));
        pos += consumed;
    }
    if spans.is_empty() {
        return None;
    }

    let (ordered, start, mut item_indent) = match_marker(spans[0].0)?;

    let mut items: Vec<ListItemRaw> = Vec::new();
    let mut cur: Vec<String> = vec![dedent(spans[0].0, item_indent)];
    let mut cur_has_blank = false;
    let mut i = 1usize;

    let consumed_lines = loop {
        if i >= spans.len() {
            items.push(ListItemRaw { body: cur.join("\n"), loose: cur_has_blank });
            break i;
        }
        let (line, _) = spans[i];

        if line.trim().is_empty() {
            if let Some((next_line, _)) = spans.get(i + 1).copied() {
                if let Some((_, _, next_indent)) = match_marker(next_line) {
                    let leading = next_line.chars().take_while(|&c| c == ' ').count();
                    if leading <= 3 {
                        items.push(ListItemRaw { body: cur.join("\n"), loose: true });
                        cur = vec![dedent(next_line, next_indent)];
                        cur_has_blank = false;
                        item_indent = next_indent;
                        i += 2;
                        continue;
                    }
                }
                let next_leading = next_line.chars().take_while(|&c| c == ' ').count();
                if !next_line.trim().is_empty() && next_leading >= item_indent {
                    cur_has_blank = true;
                    cur.push(String::new());
                    i += 1;
                    continue;
                }
            }
            items.push(ListItemRaw { body: cur.join("\n"), loose: true });
            i += 1;
            break i;
        }

        if let Some((_, _, next_indent)) = match_marker(line) {
            let leading = line.chars().take_while(|&c| c == ' ').count();
            if leading <= 3 {
                items.push(ListItemRaw { body: cur.join("\n"), loose: cur_has_blank });
                cur = vec![dedent(line, next_indent)];
                cur_has_blank = false;
                item_indent = next_indent;
                i += 1;
                continue;
            }
        }

        let leading = line.chars().take_while(|&c| c == ' ').count();
        if leading >= item_indent {
            cur.push(dedent(line, item_indent));
            i += 1;
            continue;
        }

        items.push(ListItemRaw { body: cur.join("\n"), loose: cur_has_blank });
        break i;
    };

    let consumed: usize = spans[..consumed_lines].iter().map(|(_, c)| c).sum();
    Some(Capture::new(consumed, CaptureData::List { ordered, start, items }))
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::List { ordered, start, items } = capture.data else { unreachable!() };
    let rendered: Vec<Vec<Node>> = items
        .iter()
        .map(|item| {
            if item.loose {
                recurse.run(&item.body, Mode::Block)
            } else {
                recurse.run(&item.body, Mode::Inline)
            }
        })
        .collect();
    vec![Node::List { ordered, start, items: rendered }]
}

pub fn rule() -> Rule {
    Rule {
        name: "list",
        order: 60,
        modes: &[Mode::Block],
        matcher,
        quality: None,
        transform,
    }
}
