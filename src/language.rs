use std::fmt::Display;

use serde::Serialize;

/// The five propositional variables a formula may mention, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Variable {
    #[serde(rename = "p")]
    P,
    #[serde(rename = "q")]
    Q,
    #[serde(rename = "r")]
    R,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "t")]
    T,
}

impl Variable {
    pub const ALL: [Variable; 5] = [Self::P, Self::Q, Self::R, Self::S, Self::T];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(Self::P),
            'q' => Some(Self::Q),
            'r' => Some(Self::R),
            's' => Some(Self::S),
            't' => Some(Self::T),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::P => 'p',
            Self::Q => 'q',
            Self::R => 'r',
            Self::S => 's',
            Self::T => 't',
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Every symbol a formula is built from: the variables, then the connectives
/// and parentheses. Front ends use this as their input palette.
pub const SYMBOLS: [char; 12] = [
    'p', 'q', 'r', 's', 't', '∧', '∨', '¬', '→', '↔', '(', ')',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Variable(Variable),
    UnaryOp(UnaryOperation, Box<Expr>),
    BinaryOp(BinaryOperation, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperation {
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperation {
    And,
    Or,
    Implies,
    Biconditional,
}

impl Expr {
    pub fn negation(operand: Expr) -> Self {
        Self::UnaryOp(UnaryOperation::Not, Box::new(operand))
    }

    pub fn binary(op: BinaryOperation, left: Expr, right: Expr) -> Self {
        Self::BinaryOp(op, Box::new(left), Box::new(right))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "{v}"),
            Self::UnaryOp(op, e) => write!(f, "{op}{e}"),
            Self::BinaryOp(op, a, b) => write!(f, "({a} {op} {b})"),
        }
    }
}

impl Display for UnaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "¬"),
        }
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "∧"),
            Self::Or => write!(f, "∨"),
            Self::Implies => write!(f, "→"),
            Self::Biconditional => write!(f, "↔"),
        }
    }
}
