//! Evaluation and equivalence checking for condition trees

use super::error::EvalError;
use super::Condition;
use crate::error::SimplifyError;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

impl<T> Condition<T>
where
    T: Eq + Hash + fmt::Display,
{
    /// Evaluate the tree under the given assignment
    ///
    /// The assignment must cover every atom the evaluation actually reaches;
    /// a missing atom is [`EvalError::UnassignedAtom`]. Connectives
    /// short-circuit left to right: `And` stops at the first false child,
    /// `Or` at the first true one, so children past the stopping point are
    /// not inspected (and their atoms need not be assigned).
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Condition;
    /// use std::collections::HashMap;
    ///
    /// let a = Condition::atom("a");
    /// let b = Condition::atom("b");
    /// let expr = a.and(&b);
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert("a", true);
    /// assignment.insert("b", true);
    /// assert_eq!(expr.evaluate(&assignment), Ok(true));
    ///
    /// assignment.insert("b", false);
    /// assert_eq!(expr.evaluate(&assignment), Ok(false));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<T, bool>) -> Result<bool, EvalError> {
        match self {
            Condition::Atom(token) => {
                assignment
                    .get(token)
                    .copied()
                    .ok_or_else(|| EvalError::UnassignedAtom {
                        atom: token.to_string(),
                    })
            }
            Condition::And(children) => {
                for child in children {
                    if !child.evaluate(assignment)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Condition::Or(children) => {
                for child in children {
                    if child.evaluate(assignment)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Condition::Not(inner) => Ok(!inner.evaluate(assignment)?),
            Condition::AlwaysTrue => Ok(true),
            Condition::AlwaysFalse => Ok(false),
        }
    }
}

impl<T> Condition<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    /// Check whether two trees compute the same boolean function
    ///
    /// Compares truth tables over the union of both candidate lists (this
    /// tree's atoms first, then the other's remaining ones), so trees with
    /// different structure, different atom order, or even different atom
    /// sets are compared correctly. The combined atom count is subject to
    /// the default candidate limit.
    ///
    /// This is *semantic* comparison; `==` on trees is structural.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Condition;
    ///
    /// # fn main() -> Result<(), quine_logic::SimplifyError> {
    /// let a = Condition::atom("a");
    /// let b = Condition::atom("b");
    ///
    /// let left = a.and(&b);
    /// let right = b.and(&a);
    /// assert_ne!(left, right);
    /// assert!(left.equivalent_to(&right)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn equivalent_to(&self, other: &Self) -> Result<bool, SimplifyError> {
        let mut candidates = self.candidates();
        for token in other.candidates() {
            if !candidates.iter().any(|seen| *seen == token) {
                candidates.push(token);
            }
        }

        Ok(self.boolean_table(&candidates)? == other.boolean_table(&candidates)?)
    }
}
