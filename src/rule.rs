//! The `Rule` abstraction: a named, ordered matcher+transformer pair, plus
//! the `Capture` values its matchers produce. The built-in rule set (see
//! `registry`) is a fixed, ordered array of these — dynamic dispatch
//! collapsed to a tagged variant, per the engine's design.

use crate::ast::{Align, Node};
use crate::engine::Engine;
use crate::reftable::RefTable;

/// Which rule set is currently active. `SimpleInline` is a restricted
/// inline mode used inside contexts that must not re-enter block parsing
/// (link display text, headings, emphasis bodies).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Block,
    Inline,
    SimpleInline,
}

/// A fully-parsed, not-yet-materialized list item: its raw body text and
/// whether a blank line separates it from the next item (or the end of the
/// list), which drives the per-item tight/loose decision.
#[derive(Debug, Clone)]
pub struct ListItemRaw {
    pub body: String,
    pub loose: bool,
}

/// The data a rule's `match` produced, ready for its paired `parse` to turn
/// into node(s). One variant per built-in rule; the set is closed because
/// the built-in rule set itself is closed (custom rule sets pick whichever
/// variant fits, via `Capture::Custom`).
#[derive(Debug, Clone)]
pub enum CaptureData {
    Newline,
    Paragraph { body: String },
    Heading { level: u8, body: String },
    Lheading { level: u8, body: String },
    Hr,
    CodeBlock { body: String },
    Fence { lang: Option<String>, body: String },
    BlockQuote { body: String },
    List { ordered: bool, start: Option<u64>, items: Vec<ListItemRaw> },
    Def { label: String, target: String, title: Option<String> },
    Table { header: Vec<String>, align: Vec<Align>, rows: Vec<Vec<String>> },
    Escape { ch: char },
    Autolink { url: String },
    Mailto { display: String, target: String },
    Url { url: String },
    Link { text: String, target: String, title: Option<String> },
    Image { alt: String, target: String, title: Option<String> },
    Reflink { text: String, label: String, raw: String },
    Refimage { alt: String, label: String, raw: String },
    Strong { body: String },
    Em { body: String },
    U { body: String },
    Del { body: String },
    InlineCode { body: String },
    Br,
    Text { content: String },
}

/// A successful match: how many bytes of the input it consumed, and the
/// structured data the rule's transform needs.
#[derive(Debug, Clone)]
pub struct Capture {
    pub consumed: usize,
    pub data: CaptureData,
}

impl Capture {
    pub fn new(consumed: usize, data: CaptureData) -> Self {
        Capture { consumed, data }
    }
}

/// Recursion hook threaded into every transform: re-enters the engine on
/// inner text with a (possibly overridden) mode and the same ref table.
pub struct Recurse<'a> {
    pub engine: &'a Engine,
    pub refs: &'a mut RefTable,
}

impl<'a> Recurse<'a> {
    pub fn run(&mut self, inner: &str, mode: Mode) -> Vec<Node> {
        self.engine.dispatch(inner, mode, self.refs)
    }
}

/// A named, ordered descriptor pairing a matcher with a transformer.
///
/// Plain function pointers (not trait objects) are enough here because the
/// built-in rule set is closed over a known `CaptureData`; this is the
/// "dynamic dispatch collapsed to a tagged variant" approach.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub order: u32,
    pub modes: &'static [Mode],
    /// Attempts a prefix match. Receives the last successful top-level
    /// capture for rules whose legality depends on line-start context.
    pub matcher: fn(&str, Mode, Option<&Capture>) -> Option<Capture>,
    /// Optional tiebreaker: when present, the engine scans past the first
    /// match looking for a higher-quality one (used so `table` outranks
    /// `paragraph` when an alignment row is present).
    pub quality: Option<fn(&Capture) -> i32>,
    pub transform: fn(Capture, &mut Recurse) -> Vec<Node>,
}

impl Rule {
    pub fn applies_to(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }
}
