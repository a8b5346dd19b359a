//! The built-in, fixed ordered rule set, and the factory for binding an
//! alternative rule set to a parse function.

use crate::engine::Engine;
use crate::rule::Mode;
use crate::rules::{block, inline};

/// Builds the engine bound to the built-in rule set.
pub fn default_engine() -> Engine {
    let inline_rules = inline::all();
    let simple_inline_rules = inline_rules
        .iter()
        .copied()
        .filter(|r| r.applies_to(Mode::SimpleInline))
        .collect();

    Engine {
        block_rules: block::all(),
        inline_rules,
        simple_inline_rules,
    }
}

/// Binds a caller-supplied ordered rule set to a parse function, per the
/// rule-set extension interface: a consumer can hand in alternative block
/// and inline rules and get back an `Engine` to parse with.
pub fn parser_factory(
    block_rules: Vec<crate::rule::Rule>,
    inline_rules: Vec<crate::rule::Rule>,
) -> Engine {
    let simple_inline_rules = inline_rules
        .iter()
        .copied()
        .filter(|r| r.applies_to(Mode::SimpleInline))
        .collect();
    Engine { block_rules, inline_rules, simple_inline_rules }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_has_every_built_in_rule() {
        let engine = default_engine();
        assert_eq!(engine.block_rules.len(), 11);
        assert_eq!(engine.inline_rules.len(), 15);
    }
}
