/*
 * pformat.rs
 * Copyright (c) 2025 doxml contributors
 *
 * docutils-compatible pseudo-XML rendering of document trees.
 */

use crate::attr::AttrValue;
use crate::node::{Element, Node};

const INDENT: &str = "    ";

impl Element {
    /// Render this subtree as docutils pseudo-XML.
    ///
    /// Attributes are listed in sorted order; empty lists and null fields
    /// are omitted. Text is printed line by line, one level deeper than its
    /// parent.
    pub fn pformat(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self, 0);
        out
    }

    /// The start tag as shown by [`Element::pformat`].
    pub fn starttag(&self) -> String {
        let mut attributes: Vec<(&String, String)> = self
            .attributes
            .iter()
            .filter_map(|(name, value)| render_value(value).map(|v| (name, v)))
            .collect();
        attributes.sort_by(|a, b| a.0.cmp(b.0));

        let mut tag = format!("<{}", self.kind.tag());
        for (name, value) in attributes {
            tag.push_str(&format!(" {}=\"{}\"", name, escape_attribute(&value)));
        }
        tag.push('>');
        tag
    }
}

impl Node {
    pub fn pformat(&self) -> String {
        let mut out = String::new();
        match self {
            Node::Element(element) => write_element(&mut out, element, 0),
            Node::Text(text) => write_text(&mut out, text, 0),
        }
        out
    }
}

fn write_element(out: &mut String, element: &Element, level: usize) {
    out.push_str(&INDENT.repeat(level));
    out.push_str(&element.starttag());
    out.push('\n');
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(out, child, level + 1),
            Node::Text(text) => write_text(out, text, level + 1),
        }
    }
}

fn write_text(out: &mut String, text: &str, level: usize) {
    let indent = INDENT.repeat(level);
    for line in text.lines() {
        out.push_str(&indent);
        out.push_str(line);
        out.push('\n');
    }
}

fn render_value(value: &AttrValue) -> Option<String> {
    match value {
        AttrValue::Str(s) => Some(s.clone()),
        AttrValue::List(items) if items.is_empty() => None,
        AttrValue::List(items) => Some(
            items
                .iter()
                .map(|item| serial_escape(item))
                .collect::<Vec<_>>()
                .join(" "),
        ),
        AttrValue::Null => None,
    }
}

/// Escape list items so that spaces inside an item survive the join.
fn serial_escape(item: &str) -> String {
    item.replace('\\', r"\\").replace(' ', r"\ ")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
