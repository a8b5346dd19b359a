//! Pipe table: a header line, an alignment line, and zero or more body
//! lines. Carries a `quality` so it outranks `paragraph` whenever a valid
//! alignment row follows the first line.

use crate::ast::{Align, Node};
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};
use crate::rules::util::{is_blank_line, take_line};

fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);

    let mut cells = Vec::new();
    let mut cur = String::new();
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                cur.push(c);
                cur.push(next);
                chars.next();
                continue;
            }
        }
        if c == '|' {
            cells.push(cur.trim().to_string());
            cur = String::new();
        } else {
            cur.push(c);
        }
    }
    cells.push(cur.trim().to_string());
    cells
}

fn parse_align(cell: &str) -> Option<Align> {
    let c = cell.trim();
    if c.is_empty() || !c.chars().all(|ch| ch == '-' || ch == ':') || !c.contains('-') {
        return None;
    }
    let left = c.starts_with(':');
    let right = c.ends_with(':');
    Some(match (left, right) {
        (true, true) => Align::Center,
        (true, false) => Align::Left,
        (false, true) => Align::Right,
        (false, false) => Align::None,
    })
}

fn matcher(remaining: &str, _mode: Mode, _prev: Option<&Capture>) -> Option<Capture> {
    let (header_line, header_consumed) = take_line(remaining);
    if is_blank_line(header_line) {
        return None;
    }
    let header = split_cells(header_line);

    let after_header = &remaining[header_consumed..];
    let (align_line, align_consumed) = take_line(after_header);
    let align_cells = split_cells(align_line);
    if align_cells.len() != header.len() {
        return None;
    }
    let align: Vec<Align> = align_cells.iter().map(|c| parse_align(c)).collect::<Option<_>>()?;

    let mut offset = header_consumed + align_consumed;
    let mut rows = Vec::new();
    loop {
        let rest = &remaining[offset..];
        if rest.is_empty() {
            break;
        }
        let (line, consumed) = take_line(rest);
        if is_blank_line(line) {
            offset += consumed;
            break;
        }
        rows.push(split_cells(line));
        offset += consumed;
    }

    Some(Capture::new(offset, CaptureData::Table { header, align, rows }))
}

fn quality(_capture: &Capture) -> i32 {
    1
}

fn transform(capture: Capture, recurse: &mut Recurse) -> Vec<Node> {
    let CaptureData::Table { header, align, rows } = capture.data else { unreachable!() };
    let cell = |recurse: &mut Recurse, text: &str| recurse.run(text, Mode::SimpleInline);

    let header_nodes: Vec<Vec<Node>> = header.iter().map(|c| cell(recurse, c)).collect();
    let cells: Vec<Vec<Vec<Node>>> = rows
        .iter()
        .map(|row| row.iter().map(|c| cell(recurse, c)).collect())
        .collect();

    vec![Node::Table { header: header_nodes, align, cells }]
}

pub fn rule() -> Rule {
    Rule {
        name: "table",
        order: 80,
        modes: &[Mode::Block],
        matcher,
        quality: Some(quality),
        transform,
    }
}
