/*
 * registry.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Tag lookup for the tree builder.
 */

use crate::config::ParserOptions;
use doxml_nodes::{Element, NodeKind};

/// Resolves source tags to node kinds for one conversion.
///
/// The tag tables themselves are static ([`NodeKind::from_tag`]); the
/// registry only layers the per-conversion choices on top, such as which
/// kind `math_block` and `math` construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry {
    math_ext: bool,
}

impl Registry {
    pub fn new(options: &ParserOptions) -> Self {
        Self {
            math_ext: options.math_ext,
        }
    }

    /// The kind constructed for `tag`, or `None` for an unknown tag.
    ///
    /// Internal kinds such as `document` are never returned.
    pub fn lookup(&self, tag: &str) -> Option<NodeKind> {
        let kind = NodeKind::from_tag(tag)?;
        Some(match kind {
            NodeKind::MathBlock if self.math_ext => NodeKind::DisplayMath,
            NodeKind::Math if self.math_ext => NodeKind::InlineMath,
            kind => kind,
        })
    }

    /// A fresh, empty node for `tag`.
    pub fn construct(&self, tag: &str) -> Option<Element> {
        self.lookup(tag).map(Element::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_tags() {
        let registry = Registry::default();
        assert_eq!(registry.lookup("section"), Some(NodeKind::Section));
        assert_eq!(registry.lookup("emphasis"), Some(NodeKind::Emphasis));
        assert_eq!(registry.lookup("math_block"), Some(NodeKind::MathBlock));
        assert_eq!(registry.lookup("math"), Some(NodeKind::Math));
    }

    #[test]
    fn test_unknown_and_internal_tags() {
        let registry = Registry::default();
        assert_eq!(registry.lookup("frobnicate"), None);
        assert_eq!(registry.lookup("document"), None);
        assert_eq!(registry.lookup("displaymath"), None);
        assert!(registry.construct("frobnicate").is_none());
    }

    #[test]
    fn test_math_ext_switches_kinds() {
        let registry = Registry::new(&ParserOptions::default().with_math_ext(true));
        assert_eq!(registry.lookup("math_block"), Some(NodeKind::DisplayMath));
        assert_eq!(registry.lookup("math"), Some(NodeKind::InlineMath));
        let node = registry.construct("math_block").unwrap();
        assert_eq!(node.get_str("latex"), Some(""));
    }

    #[test]
    fn test_construct_is_fresh() {
        let registry = Registry::default();
        let mut first = registry.construct("paragraph").unwrap();
        first.push_text("x");
        let second = registry.construct("paragraph").unwrap();
        assert!(second.is_empty());
    }
}
