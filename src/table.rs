use tracing::debug;

use crate::{
    eval::{evaluate_expression, Assignment},
    language::Variable,
    verdict::{classify, Verdict},
};

/// One line of a truth table: the variable values, in table order, and the
/// value of the formula under them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub values: Vec<bool>,
    pub result: bool,
}

impl Row {
    /// The row as `0`/`1` cells, result last.
    pub fn bits(&self) -> Vec<u8> {
        self.values
            .iter()
            .chain(std::iter::once(&self.result))
            .map(|&b| u8::from(b))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    pub variables: Vec<Variable>,
    pub rows: Vec<Row>,
}

impl TruthTable {
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }

    pub fn verdict(&self) -> Verdict {
        classify(&self.results())
    }
}

struct UsedVars(pub Vec<Variable>);

impl UsedVars {
    /// Spreads the bits of `num` over the variables, the first variable
    /// taking the most significant bit.
    pub fn derive_mapping(&self, mut num: u32) -> Assignment {
        let mut m = Assignment::new();
        for x in self.0.iter().rev() {
            m.insert(*x, num & 1 == 1);
            num >>= 1;
        }

        m
    }

    pub fn state_count(&self) -> u32 {
        1 << self.0.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn occurs_as_word(expression: &str, letter: char) -> bool {
    let chars: Vec<char> = expression.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        c == letter
            && (i == 0 || !is_word_char(chars[i - 1]))
            && chars.get(i + 1).map_or(true, |&next| !is_word_char(next))
    })
}

/// Lists, in canonical order, the variables that appear in `expression` as a
/// standalone word. This looks at the text only, so `pq` mentions neither
/// `p` nor `q` even though the tokenizer would split it.
pub fn discover_variables(expression: &str) -> Vec<Variable> {
    Variable::ALL
        .into_iter()
        .filter(|v| occurs_as_word(expression, v.as_char()))
        .collect()
}

/// Builds the full truth table for `expression`.
///
/// Rows enumerate every assignment in counting order. With no variables the
/// formula is evaluated once under the empty assignment. Formulas that do not
/// parse produce a table whose results are all false.
pub fn generate_truth_table(expression: &str) -> TruthTable {
    let used_vars = UsedVars(discover_variables(expression));
    debug!(variables = ?used_vars.0, "discovered variables");

    if used_vars.0.is_empty() {
        let result = evaluate_expression(expression, &Assignment::new());
        return TruthTable {
            variables: Vec::new(),
            rows: vec![Row {
                values: Vec::new(),
                result,
            }],
        };
    }

    let rows = (0..used_vars.state_count())
        .map(|i| {
            let mappings = used_vars.derive_mapping(i);
            let values = used_vars
                .0
                .iter()
                .map(|v| mappings.get(v).copied().unwrap_or(false))
                .collect();
            Row {
                values,
                result: evaluate_expression(expression, &mappings),
            }
        })
        .collect::<Vec<_>>();
    debug!(rows = rows.len(), "generated truth table");

    TruthTable {
        variables: used_vars.0,
        rows,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn discovery_is_canonical_and_whole_word() {
        assert_eq!(discover_variables("q∧p"), vec![Variable::P, Variable::Q]);
        assert_eq!(
            discover_variables("t → (s ∨ r)"),
            vec![Variable::R, Variable::S, Variable::T]
        );
        assert_eq!(discover_variables("pq"), vec![]);
        assert_eq!(discover_variables("p_ ∧ 2q"), vec![]);
        assert_eq!(discover_variables("¬p"), vec![Variable::P]);
        assert_eq!(discover_variables(""), vec![]);
    }

    #[test]
    fn mapping_is_most_significant_first() {
        let used = UsedVars(vec![Variable::P, Variable::Q, Variable::R]);
        let m = used.derive_mapping(0b110);
        assert_eq!(m[&Variable::P], true);
        assert_eq!(m[&Variable::Q], true);
        assert_eq!(m[&Variable::R], false);
        assert_eq!(used.state_count(), 8);
    }

    #[test]
    fn row_bits_end_with_result() {
        let row = Row {
            values: vec![true, false],
            result: true,
        };
        assert_eq!(row.bits(), vec![1, 0, 1]);
    }

    #[test]
    fn two_variable_table() {
        let table = generate_truth_table("p→q");
        assert_eq!(table.variables, vec![Variable::P, Variable::Q]);
        let bits: Vec<Vec<u8>> = table.rows.iter().map(Row::bits).collect();
        assert_eq!(
            bits,
            vec![vec![0, 0, 1], vec![0, 1, 1], vec![1, 0, 0], vec![1, 1, 1]]
        );
        assert_eq!(table.verdict(), Verdict::Contingency);
    }

    #[test]
    fn constant_expression_has_one_row() {
        let table = generate_truth_table("¬p_");
        assert!(table.variables.is_empty());
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].bits(), vec![1]);
        assert_eq!(table.verdict(), Verdict::Tautology);
    }
}
