//! Truth-table construction over an ordered candidate list
//!
//! A table row is one total assignment of the candidates. Rows are
//! enumerated in increasing numeric order, with the *first* candidate as the
//! most significant bit: row `r` assigns candidate `i` (of `n`) the bit
//! `(r >> (n - 1 - i)) & 1`. Row keys are the corresponding `'0'`/`'1'`
//! strings, first candidate first, so for candidates `[a, b, c]` the key
//! `"101"` means `a=1, b=0, c=1`.

use crate::error::SimplifyError;
use crate::expression::Condition;
use crate::SimplifyOptions;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

impl<T> Condition<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    /// Build the full truth table over the given candidate list
    ///
    /// `candidates` is normally [`Condition::candidates`], but any ordered
    /// list is honored exactly as given: a superset adds columns the
    /// expression ignores, a reordering permutes the keys, and a list
    /// missing one of the expression's atoms fails with an
    /// [`unassigned-atom error`](crate::EvalError) on the first row.
    ///
    /// The result has exactly `2^n` entries mapping each row key to `0` or
    /// `1`; with no candidates it is the single-row table keyed by the empty
    /// string. Uses default [`SimplifyOptions`]; see
    /// [`boolean_table_with`](Condition::boolean_table_with).
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Condition;
    ///
    /// # fn main() -> Result<(), quine_logic::SimplifyError> {
    /// let a = Condition::atom("a");
    /// let b = Condition::atom("b");
    /// let c = Condition::atom("c");
    /// let expr = a.and(&b.or(&c));
    ///
    /// let table = expr.boolean_table(&expr.candidates())?;
    /// assert_eq!(table.len(), 8);
    /// assert_eq!(table["101"], 1); // a=1, b=0, c=1
    /// assert_eq!(table["100"], 0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn boolean_table(&self, candidates: &[&T]) -> Result<BTreeMap<String, u8>, SimplifyError> {
        self.boolean_table_with(candidates, &SimplifyOptions::default())
    }

    /// Build the full truth table with explicit options
    ///
    /// The candidate-count limit is checked up front, before any row is
    /// enumerated.
    pub fn boolean_table_with(
        &self,
        candidates: &[&T],
        options: &SimplifyOptions,
    ) -> Result<BTreeMap<String, u8>, SimplifyError> {
        let width = candidates.len();
        if width > options.candidate_limit {
            return Err(SimplifyError::TooManyAtoms {
                count: width,
                limit: options.candidate_limit,
            });
        }

        let mut table = BTreeMap::new();
        for row in 0..1usize << width {
            let bits = row_bits(row, width);
            let value = self.evaluate(&row_assignment(candidates, &bits))?;
            table.insert(row_key(&bits), value as u8);
        }
        Ok(table)
    }
}

/// Collect the rows on which the expression is true, in row order
///
/// The minimizer's view of the table: only the minterm bit vectors, without
/// string keys. Callers are expected to have applied the candidate limit.
pub(crate) fn minterms<T>(
    condition: &Condition<T>,
    candidates: &[&T],
) -> Result<Vec<Vec<bool>>, SimplifyError>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    let width = candidates.len();
    let mut rows = Vec::new();
    for row in 0..1usize << width {
        let bits = row_bits(row, width);
        if condition.evaluate(&row_assignment(candidates, &bits))? {
            rows.push(bits);
        }
    }
    Ok(rows)
}

/// Bits of a row index, first candidate (most significant) first
fn row_bits(row: usize, width: usize) -> Vec<bool> {
    (0..width)
        .map(|i| (row >> (width - 1 - i)) & 1 == 1)
        .collect()
}

/// The assignment a row stands for
fn row_assignment<T: Clone + Eq + Hash>(candidates: &[&T], bits: &[bool]) -> HashMap<T, bool> {
    candidates
        .iter()
        .zip(bits)
        .map(|(token, &bit)| ((**token).clone(), bit))
        .collect()
}

/// Row key: the bits as a `'0'`/`'1'` string
fn row_key(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_bits_first_candidate_is_most_significant() {
        assert_eq!(row_bits(0b101, 3), vec![true, false, true]);
        assert_eq!(row_bits(0b001, 3), vec![false, false, true]);
        assert_eq!(row_bits(0, 0), Vec::<bool>::new());
    }

    #[test]
    fn test_row_key() {
        assert_eq!(row_key(&[true, false, true]), "101");
        assert_eq!(row_key(&[]), "");
    }

    #[test]
    fn test_table_size_and_order() {
        let a = Condition::atom("a");
        let b = Condition::atom("b");
        let expr = a.or(&b);

        let table = expr.boolean_table(&expr.candidates()).unwrap();
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["00", "01", "10", "11"]);
        let values: Vec<u8> = table.values().copied().collect();
        assert_eq!(values, vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_constant_expression_has_single_empty_row() {
        let table = Condition::<&str>::AlwaysTrue.boolean_table(&[]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[""], 1);
    }

    #[test]
    fn test_reordered_candidates_permute_keys() {
        let a = Condition::atom("a");
        let b = Condition::atom("b");
        let expr = a.and(&b.not());

        let reordered = ["b", "a"];
        let reordered: Vec<&&str> = reordered.iter().collect();
        let table = expr.boolean_table(&reordered).unwrap();
        assert_eq!(table["01"], 1); // b=0, a=1
        assert_eq!(table["10"], 0);
    }

    #[test]
    fn test_superset_candidates_add_ignored_columns() {
        let a = Condition::atom("a");
        let tokens = ["a", "z"];
        let refs: Vec<&&str> = tokens.iter().collect();
        let table = a.boolean_table(&refs).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table["10"], 1);
        assert_eq!(table["11"], 1);
        assert_eq!(table["01"], 0);
    }

    #[test]
    fn test_missing_candidate_is_an_error() {
        let a = Condition::atom("a");
        let b = Condition::atom("b");
        let expr = a.and(&b);

        let partial = ["a"];
        let refs: Vec<&&str> = partial.iter().collect();
        assert!(expr.boolean_table(&refs).is_err());
    }

    #[test]
    fn test_limit_checked_before_enumeration() {
        let a = Condition::atom(0u32);
        let tokens: Vec<u32> = (0..60).collect();
        let refs: Vec<&u32> = tokens.iter().collect();
        // 2^60 rows would never return; the guard must fire first.
        let err = a.boolean_table(&refs);
        assert_eq!(
            err,
            Err(SimplifyError::TooManyAtoms {
                count: 60,
                limit: crate::SimplifyOptions::DEFAULT_CANDIDATE_LIMIT,
            })
        );
    }
}
