/*
 * transforms/math_env.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Rewrite math nodes as extended math nodes.
 */

//! Extended math environment.
//!
//! Replaces every `math_block` with a `displaymath` node and every `math`
//! with an `inline_math` node, each carrying `latex` set to the replaced
//! node's text. Only documents whose `source` ends with one of the
//! configured suffixes are touched, so trees from other markup sources pass
//! through unchanged.

use crate::error::TransformError;
use crate::transform::DocTransform;
use doxml_nodes::{Element, Node, NodeKind};
use serde::Deserialize;

/// Settings for [`MathEnvTransform`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MathEnvConfig {
    /// Register the transform in [`crate::TransformPipeline::from_config`].
    pub enabled: bool,

    /// Source path suffixes of documents to rewrite.
    pub suffixes: Vec<String>,
}

impl Default for MathEnvConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            suffixes: vec![".xml".to_string()],
        }
    }
}

pub struct MathEnvTransform {
    config: MathEnvConfig,
}

impl MathEnvTransform {
    pub fn new(config: MathEnvConfig) -> Self {
        Self { config }
    }

    /// Whether a document with this source path is rewritten.
    pub fn applies_to(&self, source: &str) -> bool {
        self.config
            .suffixes
            .iter()
            .any(|suffix| source.ends_with(suffix.as_str()))
    }
}

impl Default for MathEnvTransform {
    fn default() -> Self {
        Self::new(MathEnvConfig::default())
    }
}

impl DocTransform for MathEnvTransform {
    fn name(&self) -> &str {
        "math-env"
    }

    fn apply(&self, document: &mut Element) -> Result<(), TransformError> {
        let Some(source) = document.source() else {
            tracing::debug!("Document has no source, skipping math environment");
            return Ok(());
        };
        tracing::info!(source = %source, "Math environment");
        if !self.applies_to(source) {
            return Ok(());
        }

        let mut replaced = 0usize;
        let mut stack: Vec<&mut Element> = vec![document];
        while let Some(element) = stack.pop() {
            for child in element.children.iter_mut() {
                let Node::Element(child) = child else { continue };
                match replacement_kind(child.kind) {
                    Some(kind) => {
                        *child = Element::extended_math(kind, child.astext());
                        replaced += 1;
                    }
                    None => stack.push(child),
                }
            }
        }

        tracing::debug!(replaced, "Math environment applied");
        Ok(())
    }
}

fn replacement_kind(kind: NodeKind) -> Option<NodeKind> {
    match kind {
        NodeKind::MathBlock => Some(NodeKind::DisplayMath),
        NodeKind::Math => Some(NodeKind::InlineMath),
        _ => None,
    }
}
