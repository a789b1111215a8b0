/*
 * parser.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Entry points: XML text in, populated document tree out.
 */

use crate::builder::TreeBuilder;
use crate::config::ParserOptions;
use crate::error::Result;
use crate::title::promote_title;
use doxml_nodes::Element;
use doxml_xml::XmlElement;

/// Parses XML documents into caller-supplied document trees.
///
/// Options are fixed at construction. A parser carries no per-document
/// state, so one instance can convert any number of documents, also from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct XmlParser {
    options: ParserOptions,
    builder: TreeBuilder,
}

impl XmlParser {
    pub fn new(options: ParserOptions) -> Self {
        let builder = TreeBuilder::new(&options);
        Self { options, builder }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse `input` and append its content to `document`.
    ///
    /// Malformed XML fails before `document` is touched. An unknown tag
    /// fails part way; `document` is then incomplete and should be
    /// discarded.
    pub fn parse(&self, input: &str, document: &mut Element) -> Result<()> {
        let root = doxml_xml::parse(input)?;
        self.parse_element(root, document)
    }

    /// Convert an already parsed XML tree into `document`.
    pub fn parse_element(&self, root: XmlElement, document: &mut Element) -> Result<()> {
        let root = promote_title(root);
        self.builder.build(&root, document)
    }
}

impl Default for XmlParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

/// Parse `input` into a new document whose `source` is `source`.
pub fn parse_document(
    input: &str,
    source: Option<&str>,
    options: &ParserOptions,
) -> Result<Element> {
    let mut document = Element::document(source);
    XmlParser::new(options.clone()).parse(input, &mut document)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use doxml_nodes::{Node, NodeKind};

    #[test]
    fn test_parse_into_document() {
        let parser = XmlParser::default();
        let mut document = Element::document(Some("a.xml"));
        parser
            .parse(r#"<document><paragraph classes="lead">Hi</paragraph></document>"#, &mut document)
            .unwrap();

        assert_eq!(document.source(), Some("a.xml"));
        let paragraph = document.children[0].as_element().unwrap();
        assert_eq!(paragraph.classes(), ["lead"]);
        assert_eq!(paragraph.children, vec![Node::text("Hi")]);
    }

    #[test]
    fn test_title_promotion_runs() {
        let document = parse_document(
            "<document><title>Intro</title><paragraph>Body</paragraph></document>",
            None,
            &ParserOptions::default(),
        )
        .unwrap();

        assert_eq!(document.children.len(), 1);
        let section = document.children[0].as_element().unwrap();
        assert_eq!(section.kind, NodeKind::Section);
        assert_eq!(section.get_str("ids"), Some("Introtitle"));
        let kinds: Vec<_> = section.children.iter().filter_map(Node::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Title, NodeKind::Paragraph]);
    }

    #[test]
    fn test_malformed_input_leaves_document_untouched() {
        let mut document = Element::document(None);
        let err = XmlParser::default()
            .parse("<document><paragraph></document>", &mut document)
            .unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)));
        assert!(document.is_empty());
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = XmlParser::new(ParserOptions::default().with_math_ext(true));
        assert!(parser.options().math_ext);
        for _ in 0..3 {
            let mut document = Element::document(None);
            parser
                .parse("<document><math_block>x</math_block></document>", &mut document)
                .unwrap();
            assert_eq!(document.children[0].kind(), Some(NodeKind::DisplayMath));
        }
    }

    #[test]
    fn test_deeply_nested_input() {
        const DEPTH: usize = 100_000;
        let input = format!(
            "<document>{}<paragraph>bottom</paragraph>{}</document>",
            "<block_quote>".repeat(DEPTH),
            "</block_quote>".repeat(DEPTH),
        );

        let mut document = Element::document(None);
        XmlParser::default().parse(&input, &mut document).unwrap();

        assert_eq!(document.descendant_count(), DEPTH + 2);
        let deepest = document.descendants().last().and_then(Node::as_text);
        assert_eq!(deepest, Some("bottom"));
    }
}
