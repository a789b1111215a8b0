/*
 * builder.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Iterative conversion of an XML element tree into an output tree.
 */

//! The tree builder.
//!
//! Source elements are visited in pre-order. Each visit classifies the tag,
//! constructs a node, detects the code language, projects attributes and
//! injects the element's own text. The node is then kept on an explicit
//! stack while its children are visited, and attached to its parent (followed
//! by the element's tail) once they are done. Deeply nested input therefore
//! costs heap, not call stack.

use crate::attributes::AttributeSchema;
use crate::config::{ParserOptions, UnknownTagPolicy};
use crate::error::{ConvertError, Result};
use crate::inject::TextInjector;
use crate::language::apply_language;
use crate::registry::Registry;
use doxml_nodes::{Element, NodeKind};
use doxml_xml::XmlElement;

/// Converts XML element trees under a fixed set of [`ParserOptions`].
///
/// A builder holds no per-conversion state and can be shared between
/// conversions.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    registry: Registry,
    schema: AttributeSchema,
    injector: TextInjector,
    unknown_tags: UnknownTagPolicy,
}

/// A node whose source children are still being visited.
struct Frame<'a> {
    source: &'a XmlElement,
    node: Element,
    remaining: std::slice::Iter<'a, XmlElement>,
}

/// What visiting one source element produced.
enum Visit {
    /// An element node; its children come next.
    Open(Element),
    /// A `text` element, already flattened to its payload.
    Text(String),
}

impl TreeBuilder {
    pub fn new(options: &ParserOptions) -> Self {
        Self {
            registry: Registry::new(options),
            schema: AttributeSchema::new(options.attribute_policy),
            injector: TextInjector::new(options.drop_blank_text),
            unknown_tags: options.unknown_tags,
        }
    }

    /// Convert the children of `root` and append them to `document`.
    ///
    /// `root` itself contributes nothing: its tag, attributes, text and tail
    /// are ignored. On error, `document` keeps the nodes constructed before
    /// the failing element.
    pub fn build(&self, root: &XmlElement, document: &mut Element) -> Result<()> {
        let before = document.descendant_count();
        tracing::debug!(
            root = %root.tag,
            elements = root.element_count() - 1,
            "Building document tree"
        );

        let mut stack: Vec<Frame<'_>> = Vec::new();
        let mut top = root.children.iter();

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.remaining.next(),
                None => top.next(),
            };

            let Some(source) = next else {
                // Current frame is complete
                let Some(frame) = stack.pop() else { break };
                let parent = match stack.last_mut() {
                    Some(parent) => &mut parent.node,
                    None => &mut *document,
                };
                parent.push(frame.node);
                self.injector.inject_tail(frame.source, parent);
                continue;
            };

            let parent_kind = stack.last().map_or(document.kind, |frame| frame.node.kind);
            match self.visit(source, parent_kind) {
                Ok(Visit::Open(node)) => stack.push(Frame {
                    source,
                    node,
                    remaining: source.children.iter(),
                }),
                Ok(Visit::Text(payload)) => {
                    let parent = match stack.last_mut() {
                        Some(parent) => &mut parent.node,
                        None => &mut *document,
                    };
                    self.injector.inject_payload(payload, parent);
                    self.injector.inject_tail(source, parent);
                }
                Err(err) => {
                    fold(stack, document);
                    return Err(err);
                }
            }
        }

        tracing::debug!(
            nodes = document.descendant_count() - before,
            "Document tree built"
        );
        Ok(())
    }

    /// Construct the node for one source element, without its children.
    fn visit(&self, source: &XmlElement, parent_kind: NodeKind) -> Result<Visit> {
        tracing::trace!(tag = %source.tag, position = source.position, "Visiting element");

        let mut node = match self.registry.construct(&source.tag) {
            Some(node) => node,
            None => Element::new(self.substitute(source, parent_kind)?),
        };
        let kind = node.kind;

        if kind == NodeKind::Text {
            return Ok(Visit::Text(source.itertext()));
        }

        apply_language(source, &mut node);
        self.schema.project(source, &mut node);
        self.injector.inject_text(source, &mut node);
        if kind.is_extended_math() {
            node.set("latex", source.itertext());
        }
        Ok(Visit::Open(node))
    }

    fn substitute(&self, source: &XmlElement, parent_kind: NodeKind) -> Result<NodeKind> {
        match self.unknown_tags {
            UnknownTagPolicy::Error => Err(ConvertError::UnknownTag {
                tag: source.tag.clone(),
                position: source.position,
            }),
            UnknownTagPolicy::Substitute => {
                let kind = if parent_kind.is_leaf() {
                    NodeKind::Inline
                } else {
                    NodeKind::Container
                };
                tracing::warn!(
                    tag = %source.tag,
                    position = source.position,
                    substitute = %kind,
                    "Unknown tag, substituting generic node"
                );
                Ok(kind)
            }
        }
    }
}

/// Attach every unfinished frame to its parent, innermost first.
fn fold(mut stack: Vec<Frame<'_>>, document: &mut Element) {
    while let Some(frame) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.node.push(frame.node),
            None => document.push(frame.node),
        }
    }
}
