//! Error types for parsing formulas and driving the command line.

use thiserror::Error;

use crate::lexer::Token;

/// Reasons a token sequence is not a well-formed formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Input ended where an operand was required.
    #[error("incomplete expression")]
    IncompleteExpression,

    /// Found a token that cannot start an operand.
    #[error("unexpected token: {0}")]
    UnexpectedToken(Token),

    /// An opening parenthesis was never closed.
    #[error("expected closing parenthesis")]
    ExpectedClosingParen,

    /// A complete formula was followed by more tokens.
    #[error("trailing tokens in expression")]
    TrailingTokens,

    /// Nesting went past the parser's depth limit.
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("expression is {len} characters long, the limit is {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("failed to serialise truth table: {0}")]
    Json(#[from] serde_json::Error),
}
