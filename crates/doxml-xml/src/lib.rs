//! ElementTree-style XML parsing for doxml.
//!
//! This crate wraps [`quick-xml`] to build a tree of [`XmlElement`]s that
//! follows the text/tail model: character data directly inside an element,
//! before its first child, is the element's `text`; character data after an
//! element's end tag, before the next sibling, is that element's `tail`.
//!
//! # Example
//!
//! ```rust
//! use doxml_xml::parse;
//!
//! let root = parse("<document><paragraph>hello<emphasis>big</emphasis> world</paragraph></document>").unwrap();
//!
//! assert_eq!(root.tag, "document");
//! let paragraph = &root.children[0];
//! assert_eq!(paragraph.text.as_deref(), Some("hello"));
//! assert_eq!(paragraph.children[0].tail.as_deref(), Some(" world"));
//! ```
//!
//! # Namespaces
//!
//! Namespace declarations are consumed while parsing and never show up as
//! attributes. Qualified element and attribute names are expanded to
//! `{uri}local` (Clark notation), which is how the rest of doxml recognises
//! environment-internal attributes.

pub mod error;
mod namespace;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use namespace::XML_NAMESPACE;
pub use parser::parse;
pub use types::{XmlAttribute, XmlElement};
