/*
 * inject.rs
 * Copyright (c) 2025 doxml contributors
 */

use doxml_nodes::Element;
use doxml_xml::XmlElement;

/// Turns element text and tails into text nodes.
///
/// Absent and empty strings never produce a node. With `drop_blank` set,
/// whitespace-only strings are skipped too.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TextInjector {
    drop_blank: bool,
}

impl TextInjector {
    pub(crate) fn new(drop_blank: bool) -> Self {
        Self { drop_blank }
    }

    fn accept<'a>(&self, content: Option<&'a str>) -> Option<&'a str> {
        content.filter(|s| !(self.drop_blank && s.trim().is_empty()))
    }

    /// Append the source's own text to `node`. Must run before any child is
    /// attached so the text ends up first.
    pub(crate) fn inject_text(&self, source: &XmlElement, node: &mut Element) -> bool {
        match self.accept(source.text()) {
            Some(text) => {
                node.push_text(text);
                true
            }
            None => false,
        }
    }

    /// Append the flattened payload of a `text` element to `parent`.
    pub(crate) fn inject_payload(&self, payload: String, parent: &mut Element) -> bool {
        let keep = self.accept(Some(payload.as_str()).filter(|p| !p.is_empty())).is_some();
        if keep {
            parent.push_text(payload);
        }
        keep
    }

    /// Append the source's tail to `parent`, directly after the node built
    /// for `source`.
    pub(crate) fn inject_tail(&self, source: &XmlElement, parent: &mut Element) -> bool {
        match self.accept(source.tail()) {
            Some(tail) => {
                parent.push_text(tail);
                true
            }
            None => false,
        }
    }
}
