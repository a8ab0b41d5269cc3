//! Error types for decoding SPARQL results and preparing queries

use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
///
/// Only [`Error::MalformedInput`] aborts a decode. Per-cell problems either
/// surface as [`Error::UnknownTermKind`] from the resolver (and are dropped by
/// the result views) or are absorbed by the string-literal fallback.
#[derive(Error, Debug)]
pub enum Error {
    /// The results document is not valid `application/sparql-results+json`
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A binding carried a `type` tag outside uri/bnode/literal/typed-literal
    #[error("Unknown term kind: {0:?}")]
    UnknownTermKind(String),

    /// A term could not be converted into an oxigraph term
    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    /// No query is stored under the requested key
    #[error("no query with key {0}")]
    QueryNotFound(String),

    /// Placeholder interpolation failed
    #[error("Template error: {0}")]
    Template(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<oxigraph::model::IriParseError> for Error {
    fn from(err: oxigraph::model::IriParseError) -> Self {
        Error::InvalidTerm(err.to_string())
    }
}

impl From<oxigraph::model::BlankNodeIdParseError> for Error {
    fn from(err: oxigraph::model::BlankNodeIdParseError) -> Self {
        Error::InvalidTerm(err.to_string())
    }
}

impl From<oxigraph::model::LanguageTagParseError> for Error {
    fn from(err: oxigraph::model::LanguageTagParseError) -> Self {
        Error::InvalidTerm(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownTermKind("triple".to_string());
        assert_eq!(err.to_string(), "Unknown term kind: \"triple\"");

        let err = Error::QueryNotFound("q3".to_string());
        assert_eq!(err.to_string(), "no query with key q3");
    }

    #[test]
    fn test_malformed_input_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\"head\":").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
