use crate::{
    error::SyntaxError,
    language::{BinaryOperation, Expr},
    lexer::{tokenize, Token},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Deepest nesting accepted, both for parser recursion (parentheses, `¬`,
/// `→`) and for the height of the resulting tree.
pub const MAX_DEPTH: usize = 256;

/// A parsed formula together with the height of its tree.
struct Subtree {
    expr: Expr,
    height: usize,
}

impl Subtree {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 0 }
    }

    fn unary(operand: Subtree) -> ParseResult<Self> {
        Self::checked(Expr::negation(operand.expr), operand.height + 1)
    }

    fn binary(op: BinaryOperation, left: Subtree, right: Subtree) -> ParseResult<Self> {
        let height = left.height.max(right.height) + 1;
        Self::checked(Expr::binary(op, left.expr, right.expr), height)
    }

    fn checked(expr: Expr, height: usize) -> ParseResult<Self> {
        if height > MAX_DEPTH {
            return Err(SyntaxError::TooDeep(MAX_DEPTH));
        }
        Ok(Self { expr, height })
    }
}

/// Recursive-descent parser over a borrowed token slice.
///
/// Precedence from loosest to tightest: `↔`, `→`, `∨`, `∧`, `¬`. The binary
/// connectives are left-associative except `→`, which groups to the right.
struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Runs `parse` one recursion level deeper, refusing to go past
    /// [`MAX_DEPTH`].
    fn descend<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    fn eat(&mut self, expected: Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Parses biconditionals, the loosest level.
    ///
    /// The rule is: `biconditional := implication ("↔" implication)*`
    fn parse_biconditional(&mut self) -> ParseResult<Subtree> {
        let mut left = self.parse_implication()?;
        while self.eat(Token::Biconditional) {
            let right = self.parse_implication()?;
            left = Subtree::binary(BinaryOperation::Biconditional, left, right)?;
        }
        Ok(left)
    }

    /// Parses material implication with right-associativity:
    /// `p → q → r` parses as `p → (q → r)`.
    ///
    /// The rule is: `implication := disjunction ("→" implication)?`
    fn parse_implication(&mut self) -> ParseResult<Subtree> {
        let left = self.parse_disjunction()?;
        if self.eat(Token::Implies) {
            let right = self.descend(Self::parse_implication)?;
            return Subtree::binary(BinaryOperation::Implies, left, right);
        }
        Ok(left)
    }

    /// The rule is: `disjunction := conjunction ("∨" conjunction)*`
    fn parse_disjunction(&mut self) -> ParseResult<Subtree> {
        let mut left = self.parse_conjunction()?;
        while self.eat(Token::Or) {
            let right = self.parse_conjunction()?;
            left = Subtree::binary(BinaryOperation::Or, left, right)?;
        }
        Ok(left)
    }

    /// The rule is: `conjunction := negation ("∧" negation)*`
    fn parse_conjunction(&mut self) -> ParseResult<Subtree> {
        let mut left = self.parse_negation()?;
        while self.eat(Token::And) {
            let right = self.parse_negation()?;
            left = Subtree::binary(BinaryOperation::And, left, right)?;
        }
        Ok(left)
    }

    /// The rule is: `negation := "¬" negation | primary`
    fn parse_negation(&mut self) -> ParseResult<Subtree> {
        if self.eat(Token::Not) {
            let operand = self.descend(Self::parse_negation)?;
            return Subtree::unary(operand);
        }
        self.parse_primary()
    }

    /// Parses a variable or a parenthesised formula.
    ///
    /// The rule is: `primary := variable | "(" biconditional ")"`
    ///
    /// # Errors
    /// - `IncompleteExpression` at end of input.
    /// - `ExpectedClosingParen` when a group is not closed.
    /// - `UnexpectedToken` for anything else.
    /// - `TooDeep` when groups nest past [`MAX_DEPTH`].
    fn parse_primary(&mut self) -> ParseResult<Subtree> {
        match self.advance() {
            None => Err(SyntaxError::IncompleteExpression),
            Some(Token::Variable(v)) => Ok(Subtree::leaf(Expr::Variable(v))),
            Some(Token::LParen) => {
                let inner = self.descend(Self::parse_biconditional)?;
                if !self.eat(Token::RParen) {
                    return Err(SyntaxError::ExpectedClosingParen);
                }
                Ok(inner)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken(token)),
        }
    }
}

/// Parses a complete token sequence into a single formula.
///
/// # Errors
/// Any [`SyntaxError`]; `TrailingTokens` if tokens remain once a formula has
/// been read, `TooDeep` if it nests past [`MAX_DEPTH`].
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens);
    let tree = parser.parse_biconditional()?;
    if parser.position < tokens.len() {
        return Err(SyntaxError::TrailingTokens);
    }
    Ok(tree.expr)
}

/// Tokenizes and parses `input`.
pub fn parse(input: &str) -> ParseResult<Expr> {
    parse_tokens(&tokenize(input))
}
