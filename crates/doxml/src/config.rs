/*
 * config.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Parser options and the on-disk configuration file.
 */

use crate::attributes::AttributePolicy;
use crate::transforms::math_env::MathEnvConfig;
use serde::Deserialize;
use thiserror::Error;

/// What to do with a tag that is in neither registry table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownTagPolicy {
    /// Fail the conversion with [`crate::ConvertError::UnknownTag`].
    #[default]
    Error,
    /// Log a warning and build a generic `inline` (inside leaf elements) or
    /// `container` (everywhere else) node instead.
    Substitute,
}

/// Options threaded through a single conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParserOptions {
    /// Build `displaymath`/`inline_math` nodes for `math_block`/`math` tags.
    pub math_ext: bool,

    pub unknown_tags: UnknownTagPolicy,

    pub attribute_policy: AttributePolicy,

    /// Skip text and tails that consist only of whitespace.
    pub drop_blank_text: bool,
}

impl ParserOptions {
    pub fn with_math_ext(mut self, math_ext: bool) -> Self {
        self.math_ext = math_ext;
        self
    }

    pub fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }

    pub fn with_attribute_policy(mut self, policy: AttributePolicy) -> Self {
        self.attribute_policy = policy;
        self
    }

    pub fn with_drop_blank_text(mut self, drop_blank_text: bool) -> Self {
        self.drop_blank_text = drop_blank_text;
        self
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Complete doxml configuration, as read from a TOML file.
///
/// ```toml
/// [parser]
/// math-ext = true
/// unknown-tags = "substitute"
/// attribute-policy = "common-lists"
///
/// [math-env]
/// enabled = true
/// suffixes = [".xml", ".dxml"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DoxmlConfig {
    pub parser: ParserOptions,
    pub math_env: MathEnvConfig,
}

impl DoxmlConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
