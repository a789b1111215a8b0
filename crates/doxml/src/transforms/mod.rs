/*
 * transforms/mod.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Tree transforms that run after conversion.
 */

//! Tree transforms that run after conversion.
//!
//! - [`MathEnvTransform`] - Rewrites plain math nodes as extended math nodes
//!
//! These transforms implement [`DocTransform`](crate::transform::DocTransform)
//! and can be added to a [`TransformPipeline`](crate::transform::TransformPipeline).

pub mod math_env;

pub use math_env::{MathEnvConfig, MathEnvTransform};
