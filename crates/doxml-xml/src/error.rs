//! Error types for XML parsing.

use thiserror::Error;

/// Result type alias for doxml-xml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing XML into an element tree.
///
/// Every variant means the input is not well-formed; no element tree is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// XML syntax error reported by quick-xml.
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { message: String, position: u64 },

    /// End tag does not match the open element.
    #[error("Mismatched end tag at byte {position}: expected </{expected}>, found </{found}>")]
    MismatchedEndTag {
        expected: String,
        found: String,
        position: u64,
    },

    /// Input ended while elements were still open.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// Empty document (no root element).
    #[error("Empty XML document: no root element found")]
    EmptyDocument,

    /// A second top-level element was found.
    #[error("Invalid XML at byte {position}: multiple root elements")]
    MultipleRoots { position: u64 },

    /// Character data outside the root element.
    #[error("Invalid XML at byte {position}: text outside the root element")]
    TextOutsideRoot { position: u64 },

    /// A qualified name uses a prefix with no namespace declaration in scope.
    #[error("Unbound namespace prefix '{prefix}' at byte {position}")]
    UnboundPrefix { prefix: String, position: u64 },
}

impl Error {
    /// Byte offset of the failure, when the error has one.
    pub fn position(&self) -> Option<u64> {
        match self {
            Error::Syntax { position, .. }
            | Error::MismatchedEndTag { position, .. }
            | Error::MultipleRoots { position }
            | Error::TextOutsideRoot { position }
            | Error::UnboundPrefix { position, .. } => Some(*position),
            Error::UnexpectedEof { .. } | Error::EmptyDocument => None,
        }
    }
}
