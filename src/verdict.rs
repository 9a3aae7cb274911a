use std::{collections::HashSet, fmt::Display};

use serde::Serialize;

/// Classification of a formula by the values in the last column of its
/// truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "Tautología")]
    Tautology,
    #[serde(rename = "Contradicción")]
    Contradiction,
    #[serde(rename = "Indeterminación")]
    Contingency,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tautology => write!(f, "Tautología"),
            Self::Contradiction => write!(f, "Contradicción"),
            Self::Contingency => write!(f, "Indeterminación"),
        }
    }
}

/// A single distinct value decides between tautology and contradiction;
/// anything else, an empty column included, is a contingency.
pub fn classify(results: &[bool]) -> Verdict {
    let distinct: HashSet<bool> = results.iter().copied().collect();
    if distinct.len() == 1 {
        if distinct.contains(&true) {
            Verdict::Tautology
        } else {
            Verdict::Contradiction
        }
    } else {
        Verdict::Contingency
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classifies_result_columns() {
        assert_eq!(classify(&[true, true, true, true]), Verdict::Tautology);
        assert_eq!(classify(&[false]), Verdict::Contradiction);
        assert_eq!(classify(&[true]), Verdict::Tautology);
        assert_eq!(classify(&[false, true]), Verdict::Contingency);
        assert_eq!(classify(&[]), Verdict::Contingency);
    }

    #[test]
    fn labels() {
        assert_eq!(Verdict::Tautology.to_string(), "Tautología");
        assert_eq!(Verdict::Contradiction.to_string(), "Contradicción");
        assert_eq!(Verdict::Contingency.to_string(), "Indeterminación");
    }
}
