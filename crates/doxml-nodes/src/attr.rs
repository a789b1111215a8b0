/*
 * attr.rs
 * Copyright (c) 2025 doxml contributors
 */

use hashlink::LinkedHashMap;
use serde::Serialize;

/// Node attributes, in insertion order.
pub type Attributes = LinkedHashMap<String, AttrValue>;

/// An attribute value on an output node.
///
/// docutils keeps some attributes (`ids`, `classes`, ...) as lists even when
/// they hold a single token, so list values are a distinct variant rather
/// than a space-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    List(Vec<String>),
    /// A declared field with no value (e.g. `number` on displayed math).
    Null,
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::List(items)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(items: Vec<&str>) -> Self {
        AttrValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl PartialEq<str> for AttrValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for AttrValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Append tokens to a list attribute, creating it if needed.
///
/// A scalar value already stored under `key` becomes the first list item,
/// so nothing is lost when a key changes shape.
pub fn extend_list<I, S>(attributes: &mut Attributes, key: &str, tokens: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entry = attributes
        .entry(key.to_string())
        .or_insert(AttrValue::Null);
    let mut items = match std::mem::replace(entry, AttrValue::Null) {
        AttrValue::Str(existing) => vec![existing],
        AttrValue::List(items) => items,
        AttrValue::Null => Vec::new(),
    };
    items.extend(tokens.into_iter().map(Into::into));
    *entry = AttrValue::List(items);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_list_creates_and_accumulates() {
        let mut attrs = Attributes::new();
        extend_list(&mut attrs, "classes", ["a"]);
        extend_list(&mut attrs, "classes", ["b", "c"]);
        assert_eq!(attrs.get("classes"), Some(&AttrValue::from(vec!["a", "b", "c"])));
    }

    #[test]
    fn test_extend_list_promotes_scalar() {
        let mut attrs = Attributes::new();
        attrs.insert("ids".to_string(), AttrValue::from("x"));
        extend_list(&mut attrs, "ids", ["y"]);
        assert_eq!(attrs.get("ids"), Some(&AttrValue::from(vec!["x", "y"])));
    }

    #[test]
    fn test_str_comparison() {
        assert_eq!(AttrValue::from("python"), "python");
        assert_ne!(AttrValue::from(vec!["python"]), "python");
    }

    #[test]
    fn test_serialize_shapes() {
        let json = serde_json::to_string(&vec![
            AttrValue::from("s"),
            AttrValue::from(vec!["a", "b"]),
            AttrValue::Null,
        ])
        .unwrap();
        assert_eq!(json, r#"["s",["a","b"],null]"#);
    }
}
