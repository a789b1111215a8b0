/*
 * lib.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Document tree type definitions for doxml.
 *
 * This crate provides the output side of the XML conversion: a typed,
 * owned document tree mirroring the docutils document object model.
 * Node kinds come from a single closed table, attributes keep insertion
 * order, and every tree can be printed as docutils pseudo-XML or
 * serialized with serde.
 */

pub mod attr;
pub mod kind;
pub mod node;
pub mod pformat;

// Re-export commonly used types at the crate root
pub use attr::{AttrValue, Attributes, extend_list};
pub use kind::{Category, ContentModel, NodeKind};
pub use node::{Descendants, Element, Node};
