/*
 * attributes.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Projection of XML attributes onto output nodes.
 */

//! Attribute projection.
//!
//! Every source attribute is copied onto the output node, except
//! namespace-qualified ones (`{uri}local`), which are environment markers
//! rather than document content. Whether a key is stored as a list or as a
//! plain string is decided by an [`AttributeSchema`], built once per
//! conversion from an [`AttributePolicy`].
//!
//! Under both policies the source keys `class` and `classes` feed the
//! `classes` list. List values accumulate. Only class lists are split on
//! whitespace; any other list-valued key is appended whole, since docutils
//! names and ids may contain spaces.

use doxml_nodes::{Element, NodeKind, extend_list};
use doxml_xml::XmlElement;
use serde::Deserialize;

/// Which keys are list-valued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributePolicy {
    /// Only `classes` is a list; every other key is overwritten as a string.
    #[default]
    ClassesOnly,
    /// The docutils basic attributes `ids`, `names`, `dupnames` and
    /// `classes` are lists on every node, plus `backrefs` on back-linkable
    /// nodes.
    CommonLists,
}

const CLASSES: &str = "classes";
const CLASSES_ONLY: &[&str] = &[CLASSES];
const COMMON: &[&str] = &["ids", "names", "dupnames", "classes"];
const COMMON_BACKLINKABLE: &[&str] = &["ids", "names", "dupnames", "classes", "backrefs"];

/// Per-kind answer to "is this attribute key list-valued".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeSchema {
    policy: AttributePolicy,
}

impl AttributeSchema {
    pub fn new(policy: AttributePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AttributePolicy {
        self.policy
    }

    /// The list-valued keys for nodes of `kind`.
    pub fn list_keys(&self, kind: NodeKind) -> &'static [&'static str] {
        match self.policy {
            AttributePolicy::ClassesOnly => CLASSES_ONLY,
            AttributePolicy::CommonLists => match kind {
                NodeKind::Footnote | NodeKind::Citation | NodeKind::SystemMessage => {
                    COMMON_BACKLINKABLE
                }
                _ => COMMON,
            },
        }
    }

    pub fn is_list_valued(&self, kind: NodeKind, key: &str) -> bool {
        self.list_keys(kind).contains(&key)
    }

    /// Copy the attributes of `source` onto `node`.
    pub fn project(&self, source: &XmlElement, node: &mut Element) {
        for attr in &source.attributes {
            if is_namespaced(&attr.name) {
                continue;
            }
            let key = if attr.name == "class" {
                CLASSES
            } else {
                attr.name.as_str()
            };
            if key == CLASSES {
                extend_list(&mut node.attributes, key, attr.value.split_whitespace());
            } else if self.is_list_valued(node.kind, key) {
                extend_list(&mut node.attributes, key, [attr.value.as_str()]);
            } else {
                node.set(key, attr.value.as_str());
            }
        }
    }
}

/// Keys in `{uri}local` form belong to a namespace and are never copied.
pub fn is_namespaced(key: &str) -> bool {
    key.contains('{') && key.contains('}')
}
