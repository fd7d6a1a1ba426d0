//! Chemical formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while parsing a formula or resolving its mass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// `)` with no open group to close
    #[error("Mismatched parentheses: unexpected ')' at offset {offset}")]
    UnmatchedClosingParen { offset: usize },

    /// Input ended with groups still open
    #[error("Mismatched parentheses: {depth} unclosed '('")]
    UnclosedParen { depth: usize },

    /// Character outside the formula grammar (strict mode)
    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },

    /// Count with no element or group before it (strict mode)
    #[error("Count at offset {offset} does not follow an element or group")]
    StrayCount { offset: usize },

    /// No elements at all (strict mode)
    #[error("Formula contains no elements")]
    Empty,

    /// Atom count does not fit in 64 bits
    #[error("Atom count overflow")]
    CountOverflow,

    /// Symbol missing from the periodic table
    #[error("Unknown element: {0}")]
    UnknownElement(String),
}

impl FormulaError {
    /// Whether the formula text itself was malformed
    ///
    /// Everything except [`FormulaError::UnknownElement`] is a syntax error.
    pub fn is_syntax(&self) -> bool {
        !matches!(self, FormulaError::UnknownElement(_))
    }
}
