//! Expression error types

use thiserror::Error;

/// Result type for expression operations
pub type ExprResult<T> = std::result::Result<T, ExprError>;

/// Broad category of an [`ExprError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected while turning characters into tokens
    Lexical,
    /// Malformed token sequence
    Syntax,
    /// Name that is neither a registered function/constant nor the bound variable
    UnknownIdentifier,
    /// Structurally invalid tree met during evaluation
    Evaluation,
}

/// Errors that can occur while lexing, parsing or evaluating an expression
///
/// Floating-point domain problems (division by zero, `sqrt(-1)`) are not
/// errors; they produce `NaN` or an infinity in an otherwise successful result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// Input failed the character whitelist
    #[error("Unsupported characters in expression")]
    UnsupportedCharacters,

    /// Whitelisted character that cannot start a token
    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },

    /// Numeric literal that could not be read
    #[error("Invalid number '{text}' at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    /// Missing `)` or a `)` without a matching `(`
    #[error("Unbalanced parentheses at offset {offset}")]
    UnbalancedParentheses { offset: usize },

    /// Token not valid at this position
    #[error("Unexpected token '{found}' at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    /// Input ended where an operand was required
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// A complete expression was followed by more tokens
    #[error("Unexpected '{found}' after expression at offset {offset}")]
    TrailingInput { found: String, offset: usize },

    /// Parentheses, calls or signs nested beyond the parser's limit
    #[error("Expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// More operators and calls than one expression may hold
    #[error("Expression has more than {limit} operations")]
    TooManyOperations { limit: usize },

    /// Function name used without an argument list
    #[error("Function {function} must be called with parentheses")]
    MissingArguments { function: String },

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// Unknown function, constant or variable
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    /// Variable node evaluated without a value bound to its name
    #[error("Variable {0} has no bound value")]
    UnboundVariable(String),
}

impl ExprError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExprError::UnsupportedCharacters
            | ExprError::UnexpectedCharacter { .. }
            | ExprError::InvalidNumber { .. } => ErrorKind::Lexical,
            ExprError::UnbalancedParentheses { .. }
            | ExprError::UnexpectedToken { .. }
            | ExprError::UnexpectedEnd
            | ExprError::TrailingInput { .. }
            | ExprError::NestingTooDeep { .. }
            | ExprError::TooManyOperations { .. }
            | ExprError::MissingArguments { .. }
            | ExprError::ArgumentCount { .. } => ErrorKind::Syntax,
            ExprError::UnknownIdentifier(_) => ErrorKind::UnknownIdentifier,
            ExprError::UnboundVariable(_) => ErrorKind::Evaluation,
        }
    }
}

/// Errors from sampling an expression over a domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// Bounds are not finite or `x_max <= x_min`
    #[error("Invalid domain [{x_min}, {x_max}]: x-max must be greater than x-min")]
    InvalidDomain { x_min: f64, x_max: f64 },

    /// Fewer than two points cannot span a domain
    #[error("At least 2 sample points are required, got {0}")]
    TooFewPoints(usize),

    /// Point count above the sampler's ceiling
    #[error("At most {limit} sample points are supported, got {requested}")]
    TooManyPoints { requested: usize, limit: usize },

    /// Expression failed to parse
    #[error(transparent)]
    Expression(#[from] ExprError),
}
