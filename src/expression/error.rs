//! Error types for expression evaluation

use std::fmt;

/// Errors raised while evaluating a condition tree
///
/// Evaluation requires a *total* assignment over the tree's atoms;
/// satisfiability under a partial assignment is undefined, so a missing
/// entry is reported immediately rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An atom had no entry in the supplied assignment
    UnassignedAtom {
        /// Rendered form of the atom's token
        atom: String,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnassignedAtom { atom } => {
                write!(f, "Atom {:?} has no value in the supplied assignment", atom)
            }
        }
    }
}

impl std::error::Error for EvalError {}
