//! Error types for parsing, typed access and encoding.

use crate::value::Kind;
use thiserror::Error;

/// Why a parser rejected its input.
///
/// Carries a reason tag only. There is no source position: a failed parse
/// reports what went wrong, never where.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was left where a value was expected.
    #[error("input is empty or whitespace only")]
    EmptyInput,

    /// The next significant character cannot start any JSON value.
    #[error("unexpected character, expected a JSON value")]
    UnexpectedChar,

    #[error("expected `true`, `false` or `null`")]
    ExpectedLiteral,

    #[error("expected a number")]
    ExpectedNumber,

    /// The numeric run parsed as neither an integer nor a finite float.
    #[error("malformed number")]
    InvalidNumber,

    #[error("expected `\"`")]
    ExpectedString,

    #[error("unterminated string")]
    UnterminatedString,

    #[error("expected `[`")]
    ExpectedArray,

    #[error("unterminated array")]
    UnterminatedArray,

    #[error("expected `{{`")]
    ExpectedObject,

    #[error("object key must be a string")]
    InvalidKey,

    #[error("expected `:` after object key")]
    ExpectedColon,

    #[error("unterminated object")]
    UnterminatedObject,

    /// Containers nested deeper than `ParseOptions::max_depth`.
    #[error("nesting deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

/// A typed accessor was used on a value holding a different variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatch {
    pub expected: Kind,
    pub found: Kind,
}

/// Errors surfaced by the public API.
#[derive(Error, Debug)]
pub enum JsonError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// A value parsed, but non-whitespace text follows it.
    #[error("trailing characters after value: consumed {consumed} of {len} bytes")]
    TrailingCharacters { consumed: usize, len: usize },

    /// The value has no JSON text representation (NaN or infinite float).
    #[error("encoding error: {0}")]
    Encode(String),

    /// A `serde_json::Value` could not be represented as a `Value`.
    #[error("conversion error: {0}")]
    Conversion(String),
}

/// Convenience alias used throughout spanjson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
