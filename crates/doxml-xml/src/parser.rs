//! XML parser that builds text/tail element trees.

use crate::namespace::{NamespaceScopes, declared_prefix};
use crate::{Error, Result, XmlAttribute, XmlElement};
use quick_xml::Reader;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};

/// Parse XML from a string, returning the root element.
///
/// # Example
///
/// ```rust
/// use doxml_xml::parse;
///
/// let root = parse("<document><title>Intro</title></document>").unwrap();
/// assert_eq!(root.tag, "document");
/// assert_eq!(root.children[0].text.as_deref(), Some("Intro"));
/// ```
///
/// # Errors
///
/// Returns an error if the XML is not well-formed.
pub fn parse(content: &str) -> Result<XmlElement> {
    let mut parser = XmlParser::new(content);
    parser.parse()
}

/// Internal parser state.
struct XmlParser<'a> {
    /// The quick-xml reader.
    reader: Reader<&'a [u8]>,

    /// Stack of elements being built.
    stack: Vec<BuildNode>,

    /// In-scope namespace declarations.
    scopes: NamespaceScopes,

    /// The completed root element, once its end tag has been read.
    root: Option<XmlElement>,
}

/// An element being constructed during parsing.
struct BuildNode {
    /// The element, with children accumulated so far.
    element: XmlElement,

    /// The name as written in the start tag, for end tag matching.
    raw_name: String,

    /// Namespace scope depth to restore when this element closes.
    scope_mark: usize,
}

impl<'a> XmlParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            reader,
            stack: Vec::new(),
            scopes: NamespaceScopes::default(),
            root: None,
        }
    }

    fn parse(&mut self) -> Result<XmlElement> {
        loop {
            // Capture position before reading the event
            let event_start = self.reader.buffer_position();

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let node = self.open_element(&e, event_start)?;
                    self.stack.push(node);
                }
                Ok(Event::End(e)) => {
                    let node = self.handle_end(&e, event_start)?;
                    self.scopes.truncate(node.scope_mark);
                    self.attach(node.element);
                }
                Ok(Event::Empty(e)) => {
                    let node = self.open_element(&e, event_start)?;
                    self.scopes.truncate(node.scope_mark);
                    self.attach(node.element);
                }
                Ok(Event::Text(e)) => {
                    self.handle_text(&e, event_start)?;
                }
                Ok(Event::CData(e)) => {
                    self.handle_cdata(&e, event_start)?;
                }
                Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {
                    // Skipped; text on either side merges into the same slot
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Syntax {
                        message: e.to_string(),
                        position: self.reader.error_position(),
                    });
                }
            }
        }

        if let Some(node) = self.stack.last() {
            return Err(Error::UnexpectedEof {
                expected: format!("closing tag </{}>", node.raw_name),
            });
        }

        self.root.take().ok_or(Error::EmptyDocument)
    }

    fn open_element(&mut self, e: &BytesStart<'_>, event_start: u64) -> Result<BuildNode> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(Error::MultipleRoots {
                position: event_start,
            });
        }

        let raw_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        let scope_mark = self.scopes.len();

        // Declarations on this tag are in scope for its own name and attributes,
        // so they are collected before anything is resolved.
        let mut raw_attributes = Vec::new();
        for attr_result in e.attributes() {
            let attr = attr_result.map_err(|err| Error::Syntax {
                message: format!("Attribute error: {}", err),
                position: event_start,
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value().map_err(|err| Error::Syntax {
                message: format!("Invalid attribute value: {}", err),
                position: event_start,
            })?;

            match declared_prefix(&key) {
                Some(prefix) => self.scopes.declare(prefix, value.into_owned()),
                None => raw_attributes.push((key, value.into_owned())),
            }
        }

        let unbound = |prefix: &str| Error::UnboundPrefix {
            prefix: prefix.to_string(),
            position: event_start,
        };

        let tag = self.scopes.expand_element(&raw_name).map_err(unbound)?;
        let mut attributes = Vec::with_capacity(raw_attributes.len());
        for (key, value) in raw_attributes {
            let name = self.scopes.expand_attribute(&key).map_err(unbound)?;
            attributes.push(XmlAttribute { name, value });
        }

        Ok(BuildNode {
            element: XmlElement {
                tag,
                attributes,
                text: None,
                tail: None,
                children: Vec::new(),
                position: event_start as usize,
            },
            raw_name,
            scope_mark,
        })
    }

    fn handle_end(&mut self, e: &BytesEnd<'_>, event_start: u64) -> Result<BuildNode> {
        let end_name = String::from_utf8_lossy(e.name().as_ref()).to_string();

        let node = self.stack.pop().ok_or_else(|| Error::Syntax {
            message: format!("Unexpected closing tag </{}>", end_name),
            position: event_start,
        })?;

        // Verify tag names match
        if node.raw_name != end_name {
            return Err(Error::MismatchedEndTag {
                expected: node.raw_name,
                found: end_name,
                position: event_start,
            });
        }

        Ok(node)
    }

    /// Add a completed element to its parent, or make it the root.
    fn attach(&mut self, element: XmlElement) {
        match self.stack.last_mut() {
            Some(parent) => parent.element.children.push(element),
            None => self.root = Some(element),
        }
    }

    fn handle_text(&mut self, e: &BytesText<'_>, event_start: u64) -> Result<()> {
        let text = e.unescape().map_err(|err| Error::Syntax {
            message: format!("Invalid text content: {}", err),
            position: event_start,
        })?;
        self.push_character_data(&text, event_start)
    }

    fn handle_cdata(&mut self, e: &BytesCData<'_>, event_start: u64) -> Result<()> {
        let text = String::from_utf8_lossy(e.as_ref());
        self.push_character_data(&text, event_start)
    }

    /// Route character data to the open element's text, or to the tail of
    /// its most recent child.
    fn push_character_data(&mut self, data: &str, event_start: u64) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        let Some(node) = self.stack.last_mut() else {
            // Whitespace around the root element is insignificant
            if data.trim().is_empty() {
                return Ok(());
            }
            return Err(Error::TextOutsideRoot {
                position: event_start,
            });
        };

        let slot = match node.element.children.last_mut() {
            Some(child) => &mut child.tail,
            None => &mut node.element.text,
        };
        match slot {
            Some(existing) => existing.push_str(data),
            None => *slot = Some(data.to_string()),
        }
        Ok(())
    }
}
