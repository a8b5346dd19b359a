//! Reference-definition table: the document-scoped mapping from a normalized
//! link label to its target, populated during the def-collection pass and
//! consulted read-only while resolving `reflink`/`refimage`.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefDef {
    pub target: String,
    pub title: Option<String>,
}

/// Lowercases ASCII letters and collapses every run of whitespace to a
/// single space, preserving a leading/trailing run as one space each.
///
/// Idempotent by construction: a string with no consecutive whitespace and
/// no uppercase ASCII is a fixed point, and `normalize` always produces one.
pub fn normalize(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_space = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            in_space = false;
            out.extend(ch.to_lowercase());
        }
    }
    out
}

#[derive(Debug, Default, Clone)]
pub struct RefTable {
    defs: HashMap<String, RefDef>,
}

impl RefTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or overwrites a definition. A later call for the same
    /// (normalized) label wins, which is what lets a `def` appearing after
    /// its reflink retroactively change the link's resolved target.
    pub fn insert(&mut self, label: &str, target: impl Into<String>, title: Option<String>) {
        self.defs.insert(
            normalize(label),
            RefDef { target: target.into(), title },
        );
    }

    pub fn get(&self, label: &str) -> Option<&RefDef> {
        self.defs.get(&normalize(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize(" h    i "), " h i ");
        assert_eq!(normalize("HiIiI"), "hiiii");
    }

    #[test]
    fn normalize_is_idempotent() {
        let label = " Weird   Label\twith\ntabs ";
        let once = normalize(label);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn later_definition_overwrites_earlier() {
        let mut table = RefTable::new();
        table.insert("x", "http://a", None);
        table.insert("X", "http://b", None);
        assert_eq!(table.get("x").unwrap().target, "http://b");
    }
}
