/*
 * language.rs
 * Copyright (c) 2025 doxml contributors
 */

//! Code language detection for literal nodes.
//!
//! docutils marks highlighted code with the class list `code <language>`,
//! e.g. `classes="code python"`. The token after `code` is the language.

use doxml_nodes::{Element, NodeKind};
use doxml_xml::XmlElement;

/// Find the language named in a class list.
///
/// Returns `None` when there is no `code` token or when `code` is the last
/// token.
pub fn language_from_classes(classes: &str) -> Option<&str> {
    let mut tokens = classes.split_whitespace();
    tokens.by_ref().find(|token| *token == "code")?;
    tokens.next()
}

/// Set `language` on a literal node from its source's class list.
///
/// Reads `classes`, falling back to `class`. Nodes other than
/// `literal_block` and `literal` are left alone.
pub fn apply_language(source: &XmlElement, node: &mut Element) {
    if !node.kind.is_code() {
        return;
    }
    let classes = source
        .get_attribute("classes")
        .or_else(|| source.get_attribute("class"));
    if let Some(language) = classes.and_then(language_from_classes) {
        node.set("language", language);
    }
}
