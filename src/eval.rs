use std::collections::HashMap;

use tracing::warn;

use crate::{
    language::{BinaryOperation, Expr, UnaryOperation, Variable},
    parser::parse,
};

/// Truth values for the variables of one table row. Variables that are not
/// mapped read as false.
pub type Assignment = HashMap<Variable, bool>;

impl BinaryOperation {
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinaryOperation::And => a & b,
            BinaryOperation::Or => a | b,
            BinaryOperation::Implies => !a | b,
            BinaryOperation::Biconditional => a == b,
        }
    }
}

impl UnaryOperation {
    pub fn apply(self, a: bool) -> bool {
        match self {
            UnaryOperation::Not => !a,
        }
    }
}

impl Expr {
    pub fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Expr::Variable(v) => assignment.get(v).copied().unwrap_or(false),
            Expr::UnaryOp(op, a) => op.apply(a.eval(assignment)),
            Expr::BinaryOp(op, a, b) => op.apply(a.eval(assignment), b.eval(assignment)),
        }
    }
}

/// Evaluates a parsed formula under `assignment`.
pub fn evaluate(expr: &Expr, assignment: &Assignment) -> bool {
    expr.eval(assignment)
}

/// Parses and evaluates `expression` in one step.
///
/// Malformed input does not propagate: the error is logged and the result is
/// false, so a table built from a bad formula is uniformly false.
pub fn evaluate_expression(expression: &str, assignment: &Assignment) -> bool {
    match parse(expression) {
        Ok(expr) => evaluate(&expr, assignment),
        Err(e) => {
            warn!(expression, error = %e, "could not evaluate expression, using false");
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assign(pairs: &[(Variable, bool)]) -> Assignment {
        pairs.iter().copied().collect()
    }

    #[test]
    fn connectives() {
        for a in [false, true] {
            for b in [false, true] {
                assert_eq!(BinaryOperation::And.apply(a, b), a && b);
                assert_eq!(BinaryOperation::Or.apply(a, b), a || b);
                assert_eq!(BinaryOperation::Implies.apply(a, b), !(a && !b));
                assert_eq!(BinaryOperation::Biconditional.apply(a, b), a == b);
            }
            assert_eq!(UnaryOperation::Not.apply(a), !a);
        }
    }

    #[test]
    fn missing_variables_read_false() {
        let expr = parse("p").unwrap();
        assert!(!evaluate(&expr, &Assignment::new()));
        let expr = parse("¬q").unwrap();
        assert!(evaluate(&expr, &assign(&[(Variable::P, true)])));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let expr = parse("(p→q)∧(q→r)→(p→r)").unwrap();
        let values = assign(&[(Variable::P, true), (Variable::Q, false), (Variable::R, true)]);
        let first = evaluate(&expr, &values);
        assert_eq!(evaluate(&expr, &values), first);
        assert!(first);
    }

    #[test]
    fn malformed_expressions_evaluate_false() {
        let everything_true = assign(&[(Variable::P, true), (Variable::Q, true)]);
        assert!(evaluate_expression("p∧q", &everything_true));
        assert!(!evaluate_expression("(p∧q", &everything_true));
        assert!(!evaluate_expression("p q", &everything_true));
        assert!(!evaluate_expression("", &everything_true));
    }
}
