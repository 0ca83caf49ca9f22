use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use super::sheet::QuoteSheet;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No configured name resolves to a column with at least one quote")]
    NoEligibleColumns,
    #[error("Column {0} has no non-empty quote cells")]
    EmptyColumn(usize),
}

/// Column indices eligible for selection, in allow-list order.
///
/// A name resolves to its first occurrence in the header row and survives
/// only if its column holds at least one non-empty quote cell. A name listed
/// twice yields its index twice.
pub fn eligible_columns(sheet: &QuoteSheet, allow_list: &[String]) -> Vec<usize> {
    allow_list
        .iter()
        .filter_map(|name| {
            let index = sheet.names().iter().position(|header| header == name)?;
            sheet.non_empty_cells(index).next().is_some().then_some(index)
        })
        .collect()
}

pub fn random_column<R: Rng>(eligible: &[usize], rng: &mut R) -> Result<usize, SelectionError> {
    eligible
        .choose(rng)
        .copied()
        .ok_or(SelectionError::NoEligibleColumns)
}

/// Picks one of the column's non-empty cells uniformly at random.
///
/// An empty column here means the eligibility filter was bypassed; that is a
/// caller bug and surfaces as an error rather than being tolerated.
pub fn random_quote<R: Rng>(
    sheet: &QuoteSheet,
    column: usize,
    rng: &mut R,
) -> Result<String, SelectionError> {
    let cells: Vec<&str> = sheet.non_empty_cells(column).collect();
    cells
        .choose(rng)
        .map(|cell| (*cell).to_owned())
        .ok_or(SelectionError::EmptyColumn(column))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn sheet(rows: Vec<Vec<&str>>) -> QuoteSheet {
        QuoteSheet::try_from(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect::<Vec<Vec<String>>>(),
        )
        .unwrap()
    }

    fn allow(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn test_columns_without_quotes_are_not_eligible() {
        // "B" resolves to a column, but every cell of it is empty.
        let sheet = sheet(vec![
            vec![],
            vec![],
            vec!["_", "_", "A", "B"],
            vec!["", "", "quote-a", ""],
            vec!["", "", "", ""],
        ]);

        assert_eq!(eligible_columns(&sheet, &allow(&["A", "B", "C"])), vec![2]);
    }

    #[test]
    fn test_eligible_columns_follow_allow_list_order() {
        let sheet = sheet(vec![
            vec![],
            vec![],
            vec!["A", "B"],
            vec!["quote-a", "quote-b"],
        ]);

        assert_eq!(eligible_columns(&sheet, &allow(&["B", "A"])), vec![1, 0]);
    }

    #[test]
    fn test_duplicate_allow_list_names_yield_duplicate_columns() {
        let sheet = sheet(vec![vec![], vec![], vec!["A"], vec!["quote-a"]]);

        assert_eq!(eligible_columns(&sheet, &allow(&["A", "A"])), vec![0, 0]);
    }

    #[test]
    fn test_duplicate_header_resolves_to_first_occurrence() {
        let sheet = sheet(vec![
            vec![],
            vec![],
            vec!["A", "A"],
            vec!["first-col", "second-col"],
        ]);

        assert_eq!(eligible_columns(&sheet, &allow(&["A"])), vec![0]);
    }

    #[test]
    fn test_unknown_names_are_dropped() {
        let sheet = sheet(vec![vec![], vec![], vec!["A"], vec!["quote-a"]]);

        assert!(eligible_columns(&sheet, &allow(&["Nobody"])).is_empty());
    }

    #[test]
    fn test_random_column_on_empty_set_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_column(&[], &mut rng),
            Err(SelectionError::NoEligibleColumns)
        );
    }

    #[test]
    fn test_random_column_picks_a_member() {
        let mut rng = StdRng::seed_from_u64(1);
        let eligible = vec![3, 5, 8];
        let column = random_column(&eligible, &mut rng).unwrap();
        assert!(eligible.contains(&column));
    }

    #[test]
    fn test_random_quote_skips_empty_cells() {
        let sheet = sheet(vec![
            vec![],
            vec![],
            vec!["A"],
            vec![""],
            vec!["q1"],
            vec![""],
            vec!["q2"],
        ]);
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..20 {
            let quote = random_quote(&sheet, 0, &mut rng).unwrap();
            assert!(quote == "q1" || quote == "q2");
        }
    }

    #[test]
    fn test_random_quote_eventually_reaches_every_cell() {
        let sheet = sheet(vec![
            vec![],
            vec![],
            vec!["A"],
            vec!["q1"],
            vec!["q2"],
            vec!["q3"],
        ]);
        let mut rng = StdRng::seed_from_u64(3);

        let seen: HashSet<String> = (0..200)
            .map(|_| random_quote(&sheet, 0, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_random_quote_on_empty_column_is_a_contract_violation() {
        let sheet = sheet(vec![vec![], vec![], vec!["A", "B"], vec!["quote-a", ""]]);
        let mut rng = StdRng::seed_from_u64(4);

        assert_eq!(
            random_quote(&sheet, 1, &mut rng),
            Err(SelectionError::EmptyColumn(1))
        );
    }
}
