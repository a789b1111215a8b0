/*
 * kind.rs
 * Copyright (c) 2025 doxml contributors
 *
 * The closed set of node kinds and their tag table.
 */

use serde::{Serialize, Serializer};

/// Where a tag is looked up during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Structural and body elements that hold arbitrary children.
    Container,
    /// Inline, text-bearing elements.
    Leaf,
}

/// How an element joins the text of its children.
///
/// Mirrors the docutils split between `TextElement` (children are inline
/// and concatenate directly) and plain `Element` (children are blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentModel {
    Text,
    Elements,
}

macro_rules! node_kinds {
    (
        registry { $( $(#[$rmeta:meta])* $rvariant:ident => $rtag:literal, $rcat:ident, $rmodel:ident; )* }
        internal { $( $(#[$imeta:meta])* $ivariant:ident => $itag:literal, $icat:ident, $imodel:ident; )* }
    ) => {
        /// Every node kind an output tree can contain.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $( $(#[$rmeta])* $rvariant, )*
            $( $(#[$imeta])* $ivariant, )*
        }

        impl NodeKind {
            /// Kinds reachable from an XML tag, in table order.
            pub const REGISTRY: &'static [NodeKind] = &[ $( NodeKind::$rvariant, )* ];

            /// The tag name used in XML input and pseudo-XML output.
            pub fn tag(self) -> &'static str {
                match self {
                    $( NodeKind::$rvariant => $rtag, )*
                    $( NodeKind::$ivariant => $itag, )*
                }
            }

            /// Look up the kind for an XML tag.
            ///
            /// Only registry kinds are returned; the document root and the
            /// extended math kinds are never produced from a tag.
            pub fn from_tag(tag: &str) -> Option<NodeKind> {
                match tag {
                    $( $rtag => Some(NodeKind::$rvariant), )*
                    _ => None,
                }
            }

            pub fn category(self) -> Category {
                match self {
                    $( NodeKind::$rvariant => Category::$rcat, )*
                    $( NodeKind::$ivariant => Category::$icat, )*
                }
            }

            pub fn content_model(self) -> ContentModel {
                match self {
                    $( NodeKind::$rvariant => ContentModel::$rmodel, )*
                    $( NodeKind::$ivariant => ContentModel::$imodel, )*
                }
            }
        }
    };
}

node_kinds! {
    registry {
        // Title elements
        Title => "title", Container, Text;
        Subtitle => "subtitle", Container, Text;
        Rubric => "rubric", Container, Text;
        // Bibliographic elements
        Docinfo => "docinfo", Container, Elements;
        Author => "author", Container, Text;
        Authors => "authors", Container, Elements;
        Organization => "organization", Container, Text;
        Address => "address", Container, Text;
        Contact => "contact", Container, Text;
        Version => "version", Container, Text;
        Revision => "revision", Container, Text;
        Status => "status", Container, Text;
        Date => "date", Container, Text;
        Copyright => "copyright", Container, Text;
        // Decorative elements
        Decoration => "decoration", Container, Elements;
        Header => "header", Container, Elements;
        Footer => "footer", Container, Elements;
        // Structural elements
        Section => "section", Container, Elements;
        Topic => "topic", Container, Elements;
        Sidebar => "sidebar", Container, Elements;
        Transition => "transition", Container, Elements;
        // Body elements
        Paragraph => "paragraph", Container, Text;
        Compound => "compound", Container, Elements;
        Container => "container", Container, Elements;
        BulletList => "bullet_list", Container, Elements;
        EnumeratedList => "enumerated_list", Container, Elements;
        ListItem => "list_item", Container, Elements;
        DefinitionList => "definition_list", Container, Elements;
        DefinitionListItem => "definition_list_item", Container, Elements;
        Term => "term", Container, Text;
        Classifier => "classifier", Container, Text;
        Definition => "definition", Container, Elements;
        FieldList => "field_list", Container, Elements;
        Field => "field", Container, Elements;
        FieldName => "field_name", Container, Text;
        FieldBody => "field_body", Container, Elements;
        Option => "option", Container, Elements;
        OptionArgument => "option_argument", Container, Text;
        OptionGroup => "option_group", Container, Elements;
        OptionList => "option_list", Container, Elements;
        OptionListItem => "option_list_item", Container, Elements;
        OptionString => "option_string", Container, Text;
        Description => "description", Container, Elements;
        LiteralBlock => "literal_block", Container, Text;
        DoctestBlock => "doctest_block", Container, Text;
        MathBlock => "math_block", Container, Text;
        LineBlock => "line_block", Container, Elements;
        Line => "line", Container, Text;
        BlockQuote => "block_quote", Container, Elements;
        Attribution => "attribution", Container, Text;
        Attention => "attention", Container, Elements;
        Caution => "caution", Container, Elements;
        Danger => "danger", Container, Elements;
        Error => "error", Container, Elements;
        Important => "important", Container, Elements;
        Note => "note", Container, Elements;
        Tip => "tip", Container, Elements;
        Hint => "hint", Container, Elements;
        Warning => "warning", Container, Elements;
        Admonition => "admonition", Container, Elements;
        Comment => "comment", Container, Text;
        SubstitutionDefinition => "substitution_definition", Container, Text;
        Target => "target", Container, Text;
        Footnote => "footnote", Container, Elements;
        Citation => "citation", Container, Elements;
        Label => "label", Container, Text;
        Figure => "figure", Container, Elements;
        Caption => "caption", Container, Text;
        Legend => "legend", Container, Elements;
        Table => "table", Container, Elements;
        Tgroup => "tgroup", Container, Elements;
        Colspec => "colspec", Container, Elements;
        Thead => "thead", Container, Elements;
        Tbody => "tbody", Container, Elements;
        Row => "row", Container, Elements;
        Entry => "entry", Container, Elements;
        Raw => "raw", Container, Text;
        SystemMessage => "system_message", Container, Elements;
        // Inline elements
        Emphasis => "emphasis", Leaf, Text;
        Strong => "strong", Leaf, Text;
        Literal => "literal", Leaf, Text;
        Reference => "reference", Leaf, Text;
        FootnoteReference => "footnote_reference", Leaf, Text;
        CitationReference => "citation_reference", Leaf, Text;
        SubstitutionReference => "substitution_reference", Leaf, Text;
        TitleReference => "title_reference", Leaf, Text;
        Abbreviation => "abbreviation", Leaf, Text;
        Acronym => "acronym", Leaf, Text;
        Superscript => "superscript", Leaf, Text;
        Subscript => "subscript", Leaf, Text;
        Math => "math", Leaf, Text;
        Image => "image", Leaf, Elements;
        Inline => "inline", Leaf, Text;
        Problematic => "problematic", Leaf, Text;
        Generated => "generated", Leaf, Text;
        /// A bare text node. Constructed as [`crate::Node::Text`], never as an element.
        Text => "text", Leaf, Text;
    }
    internal {
        /// Root of every output tree, supplied by the caller.
        Document => "document", Container, Elements;
        /// Displayed math carrying `latex`, `number`, `label` and `nowrap`.
        DisplayMath => "displaymath", Container, Text;
        /// Inline math carrying `latex`, `number`, `label` and `nowrap`.
        InlineMath => "inline_math", Leaf, Text;
    }
}

impl NodeKind {
    pub fn is_container(self) -> bool {
        self.category() == Category::Container
    }

    pub fn is_leaf(self) -> bool {
        self.category() == Category::Leaf
    }

    pub fn is_text_element(self) -> bool {
        self.content_model() == ContentModel::Text
    }

    /// Kinds whose `classes` may name a source language.
    pub fn is_code(self) -> bool {
        matches!(self, NodeKind::LiteralBlock | NodeKind::Literal)
    }

    /// Kinds that expose `latex`, `number`, `label` and `nowrap` fields.
    pub fn is_extended_math(self) -> bool {
        matches!(self, NodeKind::DisplayMath | NodeKind::InlineMath)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
