use crate::converter::notation::Notation;
use thiserror::Error;

/// Every way a conversion can fail. No converter ever returns partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The input is not well-formed in the notation it claims to be in.
    #[error("invalid {notation} expression: {expression:?}")]
    InvalidNotation {
        notation: Notation,
        expression: String,
    },

    /// An unmatched parenthesis surfaced while running the shunting-yard algorithm.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// The input contains a character no notation can make sense of.
    #[error("malformed input: unexpected character {character:?} at position {position}")]
    MalformedInput { character: char, position: usize },

    /// A converter produced output that its own validator rejects. This is a bug.
    #[error("conversion to {notation} produced an invalid expression: {output:?}")]
    InternalInconsistency { notation: Notation, output: String },
}

pub type Result<T> = std::result::Result<T, ConversionError>;
