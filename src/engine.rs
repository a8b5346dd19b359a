//! The recursive dispatcher: given a mode and a rule set, consumes the
//! input one rule-match at a time until nothing remains.

use crate::ast::Node;
use crate::reftable::RefTable;
use crate::rule::{Capture, CaptureData, Mode, Recurse, Rule};

/// A bound rule set ready to parse. Constructing an `Engine` is how a
/// consumer supplies an alternative rule set and gets back a parse
/// function, per the rule-set extension interface.
pub struct Engine {
    pub block_rules: Vec<Rule>,
    pub inline_rules: Vec<Rule>,
    pub simple_inline_rules: Vec<Rule>,
}

impl Engine {
    fn rules_for(&self, mode: Mode) -> &[Rule] {
        match mode {
            Mode::Block => &self.block_rules,
            Mode::Inline => &self.inline_rules,
            Mode::SimpleInline => &self.simple_inline_rules,
        }
    }

    /// Parses a whole document: collects every `def` into the ref table
    /// first, then performs the real block parse so reflinks resolve
    /// against the table's final state.
    pub fn parse(&self, source: &str) -> Vec<Node> {
        let mut refs = RefTable::new();
        self.collect_defs(source, &mut refs);
        let nodes = self.dispatch(source, Mode::Block, &mut refs);
        unwrap_single_unterminated_line(nodes, source, self)
    }

    pub fn parse_inline(&self, source: &str) -> Vec<Node> {
        let mut refs = RefTable::new();
        self.dispatch(source, Mode::Inline, &mut refs)
    }

    /// The core rule-dispatch loop (§4.3): iterate rules by ascending
    /// `order`, take the first match, let a `quality` function override
    /// that choice with a later, better-quality match, transform, advance,
    /// repeat until the remainder is empty.
    pub fn dispatch(&self, source: &str, mode: Mode, refs: &mut RefTable) -> Vec<Node> {
        let mut out = Vec::new();
        let mut remaining = source;
        let mut prev: Option<Capture> = None;

        while !remaining.is_empty() {
            let rules = self.rules_for(mode);
            let mut chosen: Option<(&Rule, Capture)> = None;

            for rule in rules {
                if !rule.applies_to(mode) {
                    continue;
                }
                let Some(capture) = (rule.matcher)(remaining, mode, prev.as_ref()) else {
                    continue;
                };
                match &chosen {
                    None => {
                        chosen = Some((rule, capture));
                        if chosen.as_ref().unwrap().0.quality.is_none() {
                            break;
                        }
                    }
                    Some((best_rule, best_capture)) => {
                        let best_quality = best_rule.quality.map(|q| q(best_capture));
                        if let Some(bq) = best_quality {
                            let candidate_quality = rule.quality.map(|q| q(&capture)).unwrap_or(i32::MIN);
                            if candidate_quality > bq {
                                chosen = Some((rule, capture));
                            }
                        }
                    }
                }
            }

            let Some((rule, capture)) = chosen else {
                // The built-in rule set always has a catch-all (`text` in
                // inline mode, `paragraph` in block mode); reaching this
                // means a custom rule set dropped its fallback. That is a
                // programming error in the rule set, not a parse failure.
                log::error!(
                    "rule exhaustion in {:?} mode at: {:?}",
                    mode,
                    crate::logic::logger::safe_preview(remaining, 40)
                );
                panic!("rule exhaustion: no rule matched a non-empty remainder in {:?} mode", mode);
            };

            crate::safe_debug!("dispatch: matched {:?} with rule {}", remaining, 40, rule.name);

            let consumed = capture.consumed.max(1).min(remaining.len());
            let mut recurse = Recurse { engine: self, refs };
            let nodes = (rule.transform)(capture, &mut recurse);
            out.extend(nodes);

            let matched_text = &remaining[..consumed];
            remaining = &remaining[consumed..];
            prev = Some(Capture::new(consumed, CaptureData::Text { content: matched_text.to_string() }));
        }

        out
    }

    fn collect_defs(&self, source: &str, refs: &mut RefTable) {
        let mut remaining = source;
        let mut prev: Option<Capture> = None;

        while !remaining.is_empty() {
            let rules = &self.block_rules;
            let mut chosen: Option<(&Rule, Capture)> = None;

            for rule in rules {
                if !rule.applies_to(Mode::Block) {
                    continue;
                }
                let Some(capture) = (rule.matcher)(remaining, Mode::Block, prev.as_ref()) else {
                    continue;
                };
                match &chosen {
                    None => {
                        chosen = Some((rule, capture));
                        if chosen.as_ref().unwrap().0.quality.is_none() {
                            break;
                        }
                    }
                    Some((best_rule, best_capture)) => {
                        let best_quality = best_rule.quality.map(|q| q(best_capture));
                        if let Some(bq) = best_quality {
                            let candidate_quality = rule.quality.map(|q| q(&capture)).unwrap_or(i32::MIN);
                            if candidate_quality > bq {
                                chosen = Some((rule, capture));
                            }
                        }
                    }
                }
            }

            let Some((rule, capture)) = chosen else {
                break;
            };

            match &capture.data {
                CaptureData::Def { label, target, title } => {
                    refs.insert(label, target.clone(), title.clone());
                }
                CaptureData::BlockQuote { body } => self.collect_defs(body, refs),
                CaptureData::List { items, .. } => {
                    for item in items {
                        self.collect_defs(&item.body, refs);
                    }
                }
                _ => {}
            }

            let consumed = capture.consumed.max(1).min(remaining.len());
            remaining = &remaining[consumed..];
            prev = Some(capture);
            let _ = rule;
        }
    }
}

/// §3 invariant: a document that is a single line with no trailing blank
/// line parses to its inline content directly, not wrapped in a
/// `paragraph`.
fn unwrap_single_unterminated_line(nodes: Vec<Node>, source: &str, engine: &Engine) -> Vec<Node> {
    if nodes.len() != 1 {
        return nodes;
    }
    let Node::Paragraph { .. } = &nodes[0] else {
        return nodes;
    };
    let trimmed = source.strip_suffix('\n').unwrap_or(source);
    if trimmed.contains('\n') || source.ends_with("\n\n") {
        return nodes;
    }
    let Node::Paragraph { content } = nodes.into_iter().next().unwrap() else {
        unreachable!()
    };
    let _ = engine;
    content
}
