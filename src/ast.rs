//! Node tree produced by the parser. This is the central representation
//! consumed by any downstream renderer.

use serde::{Deserialize, Serialize};

/// Table column alignment, as declared on the delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    None,
    Left,
    Right,
    Center,
}

/// A single node in the parsed tree.
///
/// `Node` is a closed sum type: every variant below is the complete set the
/// engine ever produces. Optional fields are modelled as `Option<T>` rather
/// than omitted so callers can assert presence-but-absent, matching the
/// data model's "explicit absent marker" requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Text {
        content: String,
    },
    Strong {
        content: Vec<Node>,
    },
    Em {
        content: Vec<Node>,
    },
    U {
        content: Vec<Node>,
    },
    Del {
        content: Vec<Node>,
    },
    InlineCode {
        content: String,
    },
    Br,
    Link {
        content: Vec<Node>,
        target: String,
        title: Option<String>,
    },
    Image {
        alt: String,
        target: String,
        title: Option<String>,
    },
    Paragraph {
        content: Vec<Node>,
    },
    Heading {
        level: u8,
        content: Vec<Node>,
    },
    CodeBlock {
        lang: Option<String>,
        content: String,
    },
    BlockQuote {
        content: Vec<Node>,
    },
    List {
        ordered: bool,
        start: Option<u64>,
        items: Vec<Vec<Node>>,
    },
    Table {
        header: Vec<Vec<Node>>,
        align: Vec<Align>,
        cells: Vec<Vec<Vec<Node>>>,
    },
    Hr,
    Def {
        def: String,
        target: String,
        title: Option<String>,
    },
}

impl Node {
    pub fn text(content: impl Into<String>) -> Node {
        Node::Text { content: content.into() }
    }
}
