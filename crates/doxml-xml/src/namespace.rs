//! Namespace scope tracking and `{uri}local` name expansion.

/// The namespace bound to the reserved `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Stack of in-scope namespace bindings.
///
/// Bindings are pushed when an element declares them and truncated when that
/// element closes. The default namespace uses the empty prefix; binding it to
/// the empty URI undeclares it.
#[derive(Debug, Default)]
pub(crate) struct NamespaceScopes {
    bindings: Vec<(String, String)>,
}

impl NamespaceScopes {
    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.bindings.truncate(len);
    }

    pub(crate) fn declare(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.bindings.push((prefix.into(), uri.into()));
    }

    /// Look up the URI bound to `prefix`.
    pub(crate) fn resolve(&self, prefix: &str) -> Option<&str> {
        if prefix == "xml" {
            return Some(XML_NAMESPACE);
        }
        self.bindings
            .iter()
            .rev()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    /// Expand an element name. Unprefixed names pick up the default namespace.
    ///
    /// Returns `Err(prefix)` when the prefix is unbound.
    pub(crate) fn expand_element<'n>(&self, qname: &'n str) -> Result<String, &'n str> {
        match split_qname(qname) {
            (Some(prefix), local) => self
                .resolve(prefix)
                .map(|uri| clark(uri, local))
                .ok_or(prefix),
            (None, local) => Ok(match self.resolve("") {
                Some(uri) if !uri.is_empty() => clark(uri, local),
                _ => local.to_string(),
            }),
        }
    }

    /// Expand an attribute name. Unprefixed attributes are never namespaced.
    pub(crate) fn expand_attribute<'n>(&self, qname: &'n str) -> Result<String, &'n str> {
        match split_qname(qname) {
            (Some(prefix), local) => self
                .resolve(prefix)
                .map(|uri| clark(uri, local))
                .ok_or(prefix),
            (None, local) => Ok(local.to_string()),
        }
    }
}

/// If `qname` is a namespace declaration, return the declared prefix
/// (empty for the default namespace).
pub(crate) fn declared_prefix(qname: &str) -> Option<&str> {
    if qname == "xmlns" {
        Some("")
    } else {
        qname.strip_prefix("xmlns:")
    }
}

fn split_qname(qname: &str) -> (Option<&str>, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, qname),
    }
}

fn clark(uri: &str, local: &str) -> String {
    format!("{{{}}}{}", uri, local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_prefix_is_predeclared() {
        let scopes = NamespaceScopes::default();
        assert_eq!(
            scopes.expand_attribute("xml:space"),
            Ok(format!("{{{}}}space", XML_NAMESPACE))
        );
    }

    #[test]
    fn test_inner_binding_shadows_outer() {
        let mut scopes = NamespaceScopes::default();
        scopes.declare("a", "http://outer");
        let mark = scopes.len();
        scopes.declare("a", "http://inner");
        assert_eq!(scopes.expand_element("a:x"), Ok("{http://inner}x".to_string()));

        scopes.truncate(mark);
        assert_eq!(scopes.expand_element("a:x"), Ok("{http://outer}x".to_string()));
    }

    #[test]
    fn test_default_namespace_applies_to_elements_only() {
        let mut scopes = NamespaceScopes::default();
        scopes.declare("", "http://default");
        assert_eq!(scopes.expand_element("x"), Ok("{http://default}x".to_string()));
        assert_eq!(scopes.expand_attribute("x"), Ok("x".to_string()));

        scopes.declare("", "");
        assert_eq!(scopes.expand_element("x"), Ok("x".to_string()));
    }

    #[test]
    fn test_unbound_prefix() {
        let scopes = NamespaceScopes::default();
        assert_eq!(scopes.expand_element("nope:x"), Err("nope"));
    }

    #[test]
    fn test_declared_prefix() {
        assert_eq!(declared_prefix("xmlns"), Some(""));
        assert_eq!(declared_prefix("xmlns:m"), Some("m"));
        assert_eq!(declared_prefix("class"), None);
    }
}
