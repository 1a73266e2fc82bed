//! Crate-level error type
//!
//! Operations that build truth tables (simplification, table construction,
//! equivalence checks) share one failure surface: the atom-count guard and
//! anything evaluation can raise. Construction, candidate collection, and
//! rendering are total and have no error type.

use crate::expression::error::EvalError;
use std::fmt;

/// The error type for truth-table-backed operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimplifyError {
    /// The candidate list exceeds the configured limit
    ///
    /// Raised before any enumeration begins: a table over `n` atoms has
    /// `2^n` rows, and the limit (see
    /// [`SimplifyOptions::candidate_limit`](crate::SimplifyOptions))
    /// bounds that blow-up.
    TooManyAtoms {
        /// Number of distinct atoms requested
        count: usize,
        /// The configured limit that was exceeded
        limit: usize,
    },

    /// Evaluation failed while filling in a table row
    ///
    /// This happens when a caller-supplied candidate list does not cover
    /// every atom of the expression being tabulated.
    Eval(EvalError),
}

impl fmt::Display for SimplifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimplifyError::TooManyAtoms { count, limit } => write!(
                f,
                "Expression has {} distinct atoms, above the limit of {}; \
                 the truth table would have 2^{} rows",
                count, limit, count
            ),
            SimplifyError::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SimplifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimplifyError::Eval(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EvalError> for SimplifyError {
    fn from(err: EvalError) -> Self {
        SimplifyError::Eval(err)
    }
}
