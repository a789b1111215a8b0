/*
 * title.rs
 * Copyright (c) 2025 doxml contributors
 */

//! Title promotion.
//!
//! A document whose first element is a `title` gets that title, and
//! everything after it, wrapped in an implicit `section`. The section's
//! `ids` is the title text followed by `title`, so `<title>Intro</title>`
//! produces `ids="Introtitle"`.

use doxml_xml::XmlElement;

const SECTION_TAG: &str = "section";
const TITLE_TAG: &str = "title";
const ID_SUFFIX: &str = "title";

/// Wrap the root's children in a section when the first one is a title.
///
/// The root keeps its tag, attributes, text and tail. Any other root is
/// returned unchanged.
pub fn promote_title(mut root: XmlElement) -> XmlElement {
    let Some(title) = root.children.first().filter(|c| c.tag == TITLE_TAG) else {
        return root;
    };

    let id = format!("{}{}", title.text.as_deref().unwrap_or(""), ID_SUFFIX);
    let position = title.position;
    tracing::debug!(id = %id, "Promoting document title into a section");

    let mut section = XmlElement::new(SECTION_TAG)
        .with_attribute("ids", id)
        .with_position(position);
    section.children = std::mem::take(&mut root.children);
    root.children.push(section);
    root
}
