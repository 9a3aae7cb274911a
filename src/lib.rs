//! # tabla
//!
//! Truth tables for propositional formulas over the variables `p`, `q`, `r`,
//! `s` and `t`, joined by `¬`, `∧`, `∨`, `→` and `↔`.
//!
//! ```
//! use tabla::{generate_truth_table, Verdict};
//!
//! let table = generate_truth_table("p ∨ ¬p");
//! assert_eq!(table.rows.len(), 2);
//! assert_eq!(table.verdict(), Verdict::Tautology);
//! ```

pub mod error;
pub mod eval;
pub mod language;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod table;
pub mod verdict;

pub use error::{Error, SyntaxError};
pub use eval::{evaluate, evaluate_expression, Assignment};
pub use language::{BinaryOperation, Expr, UnaryOperation, Variable, SYMBOLS};
pub use lexer::{remap_ascii_aliases, tokenize, Token};
pub use parser::{parse, parse_tokens, MAX_DEPTH};
pub use render::{render_json, render_result, render_terminal};
pub use table::{discover_variables, generate_truth_table, Row, TruthTable};
pub use verdict::{classify, Verdict};

/// Default cap on expression length accepted from untrusted callers.
pub const DEFAULT_MAX_LEN: usize = 4096;

/// Rejects expressions longer than `max` characters.
pub fn check_length(expression: &str, max: usize) -> Result<(), Error> {
    let len = expression.chars().count();
    if len > max {
        return Err(Error::InputTooLong { len, max });
    }
    Ok(())
}
