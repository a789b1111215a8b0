//! Core types for the parsed XML element tree.

/// An XML element in the text/tail model.
///
/// Elements own their children exclusively. Character data is split between
/// `text` (inside this element, before the first child) and `tail` (after
/// this element's end tag, before the next sibling), so mixed content is
/// represented without separate text children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    /// The element name. Namespaced names are in `{uri}local` form.
    pub tag: String,

    /// Attributes in source order. Namespace declarations are not included.
    pub attributes: Vec<XmlAttribute>,

    /// Character data before the first child element.
    pub text: Option<String>,

    /// Character data after this element's end tag.
    pub tail: Option<String>,

    /// Child elements in document order.
    pub children: Vec<XmlElement>,

    /// Byte offset of the start tag in the source.
    pub position: usize,
}

/// An XML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// The attribute name. Qualified names are in `{uri}local` form.
    pub name: String,

    /// The attribute value (after unescaping XML entities).
    pub value: String,
}

impl XmlElement {
    /// Create a new empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            tail: None,
            children: Vec::new(),
            position: 0,
        }
    }

    /// Builder-style helper that sets the byte position.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Builder-style helper that sets an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style helper that sets the text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style helper that sets the tail.
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// Builder-style helper that appends a child.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value by name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing an existing value with the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(XmlAttribute { name, value }),
        }
    }

    /// The text, treating an empty string as absent.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// The tail, treating an empty string as absent.
    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref().filter(|t| !t.is_empty())
    }

    /// Check if this element has child elements.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Get child elements by tag.
    pub fn get_children(&self, tag: &str) -> Vec<&XmlElement> {
        self.children.iter().filter(|e| e.tag == tag).collect()
    }

    /// All character data inside this element, in document order.
    ///
    /// Includes the text and tails of descendants, but not this element's
    /// own tail.
    pub fn itertext(&self) -> String {
        enum Pending<'a> {
            Element(&'a XmlElement),
            Tail(&'a str),
        }

        let mut out = String::new();
        let mut stack = vec![Pending::Element(self)];
        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Tail(tail) => out.push_str(tail),
                Pending::Element(element) => {
                    if let Some(text) = &element.text {
                        out.push_str(text);
                    }
                    for child in element.children.iter().rev() {
                        if let Some(tail) = &child.tail {
                            stack.push(Pending::Tail(tail));
                        }
                        stack.push(Pending::Element(child));
                    }
                }
            }
        }
        out
    }

    /// Number of elements in this subtree, including this one.
    pub fn element_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(element) = stack.pop() {
            count += 1;
            stack.extend(element.children.iter());
        }
        count
    }
}

impl Drop for XmlElement {
    // Descendants are released from a worklist, so a deep tree costs heap
    // rather than call stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut element) = pending.pop() {
            pending.append(&mut element.children);
        }
    }
}
