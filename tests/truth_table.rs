use tabla::{
    check_length, evaluate, generate_truth_table, parse, render_result, tokenize, Assignment,
    Error, Row, Variable, Verdict,
};

fn assign(pairs: &[(Variable, bool)]) -> Assignment {
    pairs.iter().copied().collect()
}

fn final_column(expression: &str) -> Vec<bool> {
    generate_truth_table(expression).results()
}

#[test]
fn row_count_is_two_to_the_variable_count() {
    for (expression, vars) in [
        ("p", 1),
        ("p∧q", 2),
        ("(p∨q)→r", 3),
        ("p↔q∨r∧¬s", 4),
        ("p∧q∧r∧s∧t", 5),
    ] {
        let table = generate_truth_table(expression);
        assert_eq!(table.variables.len(), vars, "{expression}");
        assert_eq!(table.rows.len(), 1 << vars, "{expression}");
    }
}

#[test]
fn rows_count_up_in_binary() {
    let table = generate_truth_table("r∨q∨p");
    assert_eq!(table.variables, vec![Variable::P, Variable::Q, Variable::R]);
    for (i, row) in table.rows.iter().enumerate() {
        let expected: Vec<bool> = (0..3).rev().map(|bit| (i >> bit) & 1 == 1).collect();
        assert_eq!(row.values, expected, "row {i}");
    }
}

#[test]
fn tautology_and_contradiction() {
    let table = generate_truth_table("p∨¬p");
    assert!(table.results().iter().all(|&r| r));
    assert_eq!(table.verdict(), Verdict::Tautology);
    assert!(render_result(&table, "p∨¬p").contains("Resultado: Tautología"));

    let table = generate_truth_table("p∧¬p");
    assert!(table.results().iter().all(|&r| !r));
    assert_eq!(table.verdict(), Verdict::Contradiction);
    assert!(render_result(&table, "p∧¬p").contains("Resultado: Contradicción"));
}

#[test]
fn contingency() {
    let table = generate_truth_table("p∧q∧r∧s∧t");
    assert_eq!(table.results().iter().filter(|&&r| r).count(), 1);
    assert_eq!(table.rows.last().map(|row| row.result), Some(true));
    assert_eq!(table.verdict(), Verdict::Contingency);
    assert!(render_result(&table, "p∧q∧r∧s∧t").contains("Indeterminación"));
}

#[test]
fn and_binds_tighter_than_or() {
    let values = assign(&[(Variable::P, true), (Variable::Q, false), (Variable::R, false)]);
    assert!(evaluate(&parse("p∨q∧r").unwrap(), &values));
    assert!(!evaluate(&parse("(p∨q)∧r").unwrap(), &values));
}

#[test]
fn implication_groups_to_the_right() {
    let values = assign(&[(Variable::P, false), (Variable::Q, false), (Variable::R, false)]);
    assert!(evaluate(&parse("p→q→r").unwrap(), &values));
    assert!(evaluate(&parse("p→(q→r)").unwrap(), &values));
    assert!(!evaluate(&parse("(p→q)→r").unwrap(), &values));
    assert_eq!(final_column("p→q→r"), final_column("p→(q→r)"));
    assert_ne!(final_column("p→q→r"), final_column("(p→q)→r"));
}

#[test]
fn biconditional_groups_to_the_left() {
    assert_eq!(parse("p↔q↔r").unwrap(), parse("(p↔q)↔r").unwrap());
    assert_ne!(parse("p↔q↔r").unwrap(), parse("p↔(q↔r)").unwrap());
}

#[test]
fn unbalanced_parenthesis_fails_soft() {
    let table = generate_truth_table("(p∧q");
    assert_eq!(table.variables, vec![Variable::P, Variable::Q]);
    assert_eq!(table.rows.len(), 4);
    assert!(table.rows.iter().all(|row| !row.result));
    assert_eq!(table.verdict(), Verdict::Contradiction);
}

#[test]
fn constant_expressions() {
    let table = generate_truth_table("hello");
    assert!(table.variables.is_empty());
    assert_eq!(table.rows.iter().map(Row::bits).collect::<Vec<_>>(), vec![vec![0]]);

    let table = generate_truth_table("");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.verdict(), Verdict::Contradiction);
}

#[test]
fn unrecognised_characters_are_ignored() {
    assert_eq!(tokenize("p @ ∧ q"), tokenize("p∧q"));
    assert_eq!(final_column("p @ ∧ q"), final_column("p∧q"));
}

#[test]
fn length_cap() {
    assert!(check_length("p∧q", 3).is_ok());
    assert!(matches!(
        check_length("p∧q∧r", 3),
        Err(Error::InputTooLong { len: 5, max: 3 })
    ));
}

#[test]
fn deeply_nested_input_fails_soft() {
    let nested = "(".repeat(100_000) + "p" + &")".repeat(100_000);
    let table = generate_truth_table(&nested);
    assert_eq!(table.variables, vec![Variable::P]);
    assert_eq!(table.results(), vec![false, false]);
    assert_eq!(table.verdict(), Verdict::Contradiction);

    let chain = "p".to_string() + &"∧q".repeat(100_000);
    assert!(generate_truth_table(&chain).results().iter().all(|&r| !r));
}

#[test]
fn nesting_within_the_limit_still_evaluates() {
    let nested = "(".repeat(200) + "p" + &")".repeat(200);
    assert_eq!(generate_truth_table(&nested).results(), vec![false, true]);
}
