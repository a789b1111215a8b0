/*
 * node.rs
 * Copyright (c) 2025 doxml contributors
 */

use crate::attr::{AttrValue, Attributes};
use crate::kind::NodeKind;
use serde::Serialize;

/// A node in the output document tree.
///
/// Text nodes are terminal: they hold a string payload and own no children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element node: a kind, its attributes and its owned children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    #[serde(rename = "tag")]
    pub kind: NodeKind,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

/// Fields of an extended math node that start out null.
const MATH_NULL_FIELDS: [&str; 3] = ["number", "label", "nowrap"];

impl Element {
    /// Create a fresh, empty node of the given kind.
    ///
    /// Extended math kinds start with their `latex`, `number`, `label` and
    /// `nowrap` fields declared; `latex` is empty and the others are null.
    pub fn new(kind: NodeKind) -> Self {
        let mut attributes = Attributes::new();
        if kind.is_extended_math() {
            attributes.insert("latex".to_string(), AttrValue::from(""));
            for field in MATH_NULL_FIELDS {
                attributes.insert(field.to_string(), AttrValue::Null);
            }
        }
        Self {
            kind,
            attributes,
            children: Vec::new(),
        }
    }

    /// Create an empty document root, optionally recording its source path.
    pub fn document(source: Option<&str>) -> Self {
        let mut document = Self::new(NodeKind::Document);
        if let Some(source) = source {
            document.set("source", source);
        }
        document
    }

    /// Create an extended math node for the given LaTeX source.
    pub fn extended_math(kind: NodeKind, latex: impl Into<String>) -> Self {
        let latex = latex.into();
        let mut node = Self::new(kind);
        node.set("latex", latex.as_str());
        node.push_text(latex);
        node
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// The value of a string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    /// Set an attribute. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.get_mut(&key) {
            Some(existing) => *existing = value,
            None => {
                self.attributes.insert(key, value);
            }
        }
    }

    /// The `classes` list, empty when absent.
    pub fn classes(&self) -> &[String] {
        self.get("classes").and_then(AttrValue::as_list).unwrap_or(&[])
    }

    /// The `source` attribute, if set.
    pub fn source(&self) -> Option<&str> {
        self.get_str("source")
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The text content of this subtree.
    ///
    /// Text elements concatenate their children directly; other elements
    /// separate each child's text with a blank line. Extended math nodes
    /// report their `latex` field.
    pub fn astext(&self) -> String {
        if self.kind.is_extended_math() {
            if let Some(latex) = self.get_str("latex").filter(|l| !l.is_empty()) {
                return latex.to_string();
            }
        }
        let separator = if self.kind.is_text_element() { "" } else { "\n\n" };
        self.children
            .iter()
            .map(Node::astext)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Pre-order iterator over the descendants of this element.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Number of nodes below this element, text nodes included.
    pub fn descendant_count(&self) -> usize {
        self.descendants().count()
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// The kind of an element node; `None` for text.
    pub fn kind(&self) -> Option<NodeKind> {
        self.as_element().map(|e| e.kind)
    }

    pub fn astext(&self) -> String {
        match self {
            Node::Element(element) => element.astext(),
            Node::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Drop for Element {
    // Same worklist release as the source tree: nesting depth never reaches
    // the call stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Pre-order traversal over a subtree, driven by an explicit stack.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(element) = node {
            self.stack.extend(element.children.iter().rev());
        }
        Some(node)
    }
}
