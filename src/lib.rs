//! A rule-driven, recursive-descent lightweight-markup parser.
//!
//! `parse` transforms a source string into a tree of [`Node`]s. The engine
//! is a fixed ordered set of [`Rule`]s dispatched by [`engine::Engine`];
//! consumers who want a different rule set can build their own via
//! [`registry::parser_factory`].

pub mod ast;
pub mod engine;
pub mod logic;
pub mod reftable;
pub mod registry;
pub mod rule;
pub mod rules;

pub use ast::{Align, Node};
pub use reftable::RefTable;
pub use rule::{Capture, CaptureData, Mode, Rule};
pub use registry::parser_factory;

use std::sync::LazyLock;

static DEFAULT_ENGINE: LazyLock<engine::Engine> = LazyLock::new(registry::default_engine);

/// Parses a complete document into its top-level block nodes.
pub fn parse(source: &str) -> Vec<Node> {
    DEFAULT_ENGINE.parse(source)
}

/// Parses a fragment directly in inline mode, bypassing block dispatch.
pub fn parse_inline(source: &str) -> Vec<Node> {
    DEFAULT_ENGINE.parse_inline(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_1_plain_text() {
        assert_eq!(parse("hi there"), vec![Node::text("hi there")]);
    }

    #[test]
    fn scenario_2_nested_emphasis() {
        let nodes = parse("***hi***");
        assert_eq!(
            nodes,
            vec![Node::Strong { content: vec![Node::Em { content: vec![Node::text("hi")] }] }]
        );
    }

    #[test]
    fn scenario_3_reflink_retroactive_def() {
        let nodes = parse("[Google][HiIiI]\n\n[HIiii]: http://www.google.com\n\n");
        assert_eq!(
            nodes,
            vec![
                Node::Paragraph {
                    content: vec![Node::Link {
                        content: vec![Node::text("Google")],
                        target: "http://www.google.com".to_string(),
                        title: None,
                    }]
                },
                Node::Def {
                    def: "hiiii".to_string(),
                    target: "http://www.google.com".to_string(),
                    title: None,
                },
            ]
        );
    }

    #[test]
    fn scenario_4_table() {
        let nodes = parse("| h1 | h2 |\n| :- | -: |\n| a | b |\n\n");
        assert_eq!(
            nodes,
            vec![Node::Table {
                header: vec![vec![Node::text("h1")], vec![Node::text("h2")]],
                align: vec![Align::Left, Align::Right],
                cells: vec![vec![vec![Node::text("a")], vec![Node::text("b")]]],
            }]
        );
    }

    #[test]
    fn scenario_5_loose_list() {
        let nodes = parse(" * a\n\n * b\n\n");
        assert_eq!(nodes.len(), 1);
        let Node::List { ordered, start, items } = &nodes[0] else { panic!() };
        assert!(!ordered);
        assert_eq!(*start, None);
        assert_eq!(items.len(), 2);
        for item in items {
            assert_eq!(item.len(), 1);
            assert!(matches!(item[0], Node::Paragraph { .. }));
        }
    }

    #[test]
    fn scenario_6_reflink_final_def_wins_for_both() {
        let nodes = parse("[test][1]\n\n[1]: http://a\n\n[test2][1]\n\n[1]: http://b\n\n");
        let links: Vec<&str> = nodes
            .iter()
            .filter_map(|n| match n {
                Node::Paragraph { content } => match content.first() {
                    Some(Node::Link { target, .. }) => Some(target.as_str()),
                    _ => None,
                },
                _ => None,
            })
            .collect();
        assert_eq!(links, vec!["http://b", "http://b"]);

        let defs: Vec<&str> = nodes
            .iter()
            .filter_map(|n| match n {
                Node::Def { def, .. } => Some(def.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(defs, vec!["1", "1"]);
    }

    #[test]
    fn strikethrough_degenerates_on_five_tildes() {
        let nodes = parse_inline("~~~~~");
        assert_eq!(nodes, vec![Node::Del { content: vec![Node::text("~")] }]);
    }

    #[test]
    fn seven_hashes_clamp_to_heading_level_six() {
        let nodes = parse("####### foo");
        assert_eq!(nodes, vec![Node::Heading { level: 6, content: vec![Node::text("# foo")] }]);
    }
}
