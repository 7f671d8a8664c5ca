//! Error types for reading and writing robot description documents.

use thiserror::Error;

/// Result type alias for document I/O.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or writing a document.
///
/// Element construction never fails; only the `xml` module returns these.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or unsupported document structure.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error from quick-xml.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}
