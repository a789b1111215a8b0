/*
 * transform.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Document tree transformation pipeline.
 */

//! Document tree transformation pipeline.
//!
//! - [`DocTransform`] - The trait implemented by all transformations
//! - [`TransformPipeline`] - Ordered collection of transforms to execute
//!
//! Transforms run after conversion, in insertion order, over the complete
//! document tree.
//!
//! # Example
//!
//! ```rust
//! use doxml::{DocTransform, Element, TransformError, TransformPipeline};
//!
//! struct Tag;
//!
//! impl DocTransform for Tag {
//!     fn name(&self) -> &str { "tag" }
//!
//!     fn apply(&self, document: &mut Element) -> Result<(), TransformError> {
//!         document.set("classes", vec!["tagged"]);
//!         Ok(())
//!     }
//! }
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(Tag));
//!
//! let mut document = Element::document(None);
//! pipeline.execute(&mut document).unwrap();
//! assert_eq!(document.classes(), ["tagged"]);
//! ```

use crate::config::DoxmlConfig;
use crate::error::TransformError;
use crate::transforms::math_env::MathEnvTransform;
use doxml_nodes::Element;

/// Trait for document tree transformations.
///
/// Transforms must be `Send + Sync` so a pipeline can be shared between
/// threads converting different documents.
pub trait DocTransform: Send + Sync {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &str;

    /// Apply the transformation to a document tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformation fails.
    fn apply(&self, document: &mut Element) -> Result<(), TransformError>;
}

/// A pipeline of document transforms to execute in order.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn DocTransform>>,
}

impl TransformPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// The pipeline described by a configuration.
    ///
    /// The math environment transform is included only when enabled.
    pub fn from_config(config: &DoxmlConfig) -> Self {
        let mut pipeline = Self::new();
        if config.math_env.enabled {
            pipeline.push(Box::new(MathEnvTransform::new(config.math_env.clone())));
        }
        pipeline
    }

    /// Add a transform to the pipeline.
    ///
    /// Transforms run in the order they are added.
    pub fn push(&mut self, transform: Box<dyn DocTransform>) {
        self.transforms.push(transform);
    }

    /// Add multiple transforms to the pipeline.
    pub fn extend(&mut self, transforms: impl IntoIterator<Item = Box<dyn DocTransform>>) {
        self.transforms.extend(transforms);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Execute all transforms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops on error.
    pub fn execute(&self, document: &mut Element) -> Result<(), TransformError> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            transform.apply(document)?;
        }

        Ok(())
    }

    /// List the names of all transforms in execution order.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
