use std::fmt::Display;

use logos::Logos;
use tracing::trace;

use crate::language::Variable;

/// A single symbol of a formula. Whitespace is skipped by the lexer and
/// anything else it does not recognise is dropped by [`tokenize`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token {
    #[token("p", |_| Variable::P)]
    #[token("q", |_| Variable::Q)]
    #[token("r", |_| Variable::R)]
    #[token("s", |_| Variable::S)]
    #[token("t", |_| Variable::T)]
    Variable(Variable),
    #[token("¬")]
    Not,
    #[token("∧")]
    And,
    #[token("∨")]
    Or,
    #[token("→")]
    Implies,
    #[token("↔")]
    Biconditional,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "{v}"),
            Self::Not => write!(f, "¬"),
            Self::And => write!(f, "∧"),
            Self::Or => write!(f, "∨"),
            Self::Implies => write!(f, "→"),
            Self::Biconditional => write!(f, "↔"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Splits `input` into tokens. Never fails: characters outside the alphabet
/// are silently discarded.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => trace!(span = ?lexer.span(), "dropping unrecognised input"),
        }
    }
    tokens
}

/// Rewrites the ASCII stand-ins `! & | > =` into `¬ ∧ ∨ → ↔`.
pub fn remap_ascii_aliases(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '!' => '¬',
            '&' => '∧',
            '|' => '∨',
            '>' => '→',
            '=' => '↔',
            other => other,
        })
        .collect()
}
