//! Defines [`WktError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::datatypes::Dimension;

/// Enum with all errors in this crate.
///
/// Tokenization failures are always [`WktError::Syntax`], carrying the byte
/// offset of the offending lexeme and what was expected there. A failed scan is
/// unrecoverable: discard the tokenizer and the partial token stream.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WktError {
    /// The input matched no recognized token shape at the given position.
    #[error("syntax error at byte {pos}: expected {expected}")]
    Syntax {
        /// Byte offset into the input where scanning failed.
        pos: usize,
        /// Human-readable expectation, e.g. "a coordinate, list start, or EMPTY".
        expected: &'static str,
    },

    /// The token stream did not follow the WKT grammar.
    #[error("unexpected token at byte {pos}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Byte offset just past the offending token.
        pos: usize,
        /// What the grammar required at this point.
        expected: &'static str,
        /// Description of the token actually seen.
        found: &'static str,
    },

    /// Sibling parts of one geometry carry coordinates of differing dimensions.
    #[error("mixed coordinate dimensions: {expected} and {found}")]
    MixedDimensions {
        /// Dimension established by the first part.
        expected: Dimension,
        /// Conflicting dimension of a later part.
        found: Dimension,
    },

    /// Input continued past a complete geometry literal.
    #[error("trailing input at byte {pos}")]
    TrailingInput {
        /// Byte offset of the first trailing token.
        pos: usize,
    },

    /// Conversion into the external geometry engine's model failed.
    #[cfg(feature = "geo")]
    #[error("cannot convert to geo: {0}")]
    GeoConversion(&'static str),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, WktError>;
