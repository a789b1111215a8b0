//! Error types for doxml

use thiserror::Error;

/// Errors that abort a conversion.
///
/// Neither variant is recovered internally. After an error the document
/// holds only the nodes built before the failing element and should be
/// discarded by the caller.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input is not well-formed XML. Nothing was converted.
    #[error("Malformed XML input: {0}")]
    MalformedInput(#[from] doxml_xml::Error),

    /// An element's tag is in neither the container nor the leaf table.
    #[error("Unknown tag <{tag}> at byte {position}")]
    UnknownTag { tag: String, position: usize },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors raised by tree transforms.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Transform '{transform}' failed: {message}")]
    Failed { transform: String, message: String },
}

impl TransformError {
    pub fn failed(transform: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            transform: transform.into(),
            message: message.into(),
        }
    }
}
