/*
 * lib.rs
 * Copyright (c) 2025 doxml contributors
 */

//! Convert XML documents into docutils-compatible document trees.
//!
//! The conversion walks a parsed XML element tree and rebuilds it as a
//! typed [`Element`] tree:
//!
//! - [`registry`] maps each tag to a [`NodeKind`] (container or leaf)
//! - [`attributes`] projects XML attributes onto nodes under an explicit
//!   [`AttributeSchema`]
//! - [`language`] pulls a code language out of a `classes` list
//! - [`builder`] performs the traversal, injecting text and tails
//! - [`title`] wraps a leading document title in an implicit section
//!
//! After conversion, a [`TransformPipeline`] can rewrite the tree further.
//!
//! # Example
//!
//! ```rust
//! use doxml::{Element, ParserOptions, XmlParser};
//!
//! let parser = XmlParser::new(ParserOptions::default());
//! let mut document = Element::document(Some("intro.xml"));
//! parser
//!     .parse("<document><title>Intro</title><paragraph>Hi</paragraph></document>", &mut document)
//!     .unwrap();
//!
//! let section = document.children[0].as_element().unwrap();
//! assert_eq!(section.get_str("ids"), Some("Introtitle"));
//! ```

pub mod attributes;
pub mod builder;
pub mod config;
pub mod error;
mod inject;
pub mod language;
pub mod parser;
pub mod registry;
pub mod title;
pub mod transform;
pub mod transforms;

pub use attributes::{AttributePolicy, AttributeSchema};
pub use builder::TreeBuilder;
pub use config::{ConfigError, DoxmlConfig, ParserOptions, UnknownTagPolicy};
pub use error::{ConvertError, Result, TransformError};
pub use parser::{XmlParser, parse_document};
pub use registry::Registry;
pub use transform::{DocTransform, TransformPipeline};
pub use transforms::math_env::{MathEnvConfig, MathEnvTransform};

// Re-export the tree types so callers need only one dependency
pub use doxml_nodes::{AttrValue, Attributes, Category, Element, Node, NodeKind};
pub use doxml_xml::{XmlAttribute, XmlElement};
