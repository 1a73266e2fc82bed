//! Boolean expression trees
//!
//! This module provides [`Condition`], an immutable tree of boolean
//! connectives over caller-supplied atom tokens. Trees are built bottom-up
//! with the [`Condition::atom`] constructor and the `and`/`or`/`not`
//! combinators (or the `expr!` macro), and are never mutated afterwards:
//! every combinator allocates a new parent node.
//!
//! # Main operations
//!
//! - [`Condition::evaluate`] - truth value under an assignment
//! - [`Condition::candidates`] - the ordered, deduplicated atom list
//! - [`Condition::boolean_table`] - the full truth table (see [`crate::table`])
//! - [`Condition::simplify`] - minimal sum-of-products rewrite
//!
//! Equality between two trees is *structural* (same variants, same children,
//! equal atom tokens), not semantic: `a && b` and `b && a` are equivalent but
//! not equal. Use [`Condition::equivalent_to`] for semantic comparison.

// Submodules
mod candidates;
mod display;
pub mod error;
mod eval;
mod minimize;
mod operators;

/// A boolean expression node
///
/// The variant set is closed: every consumer of a tree matches exhaustively,
/// so there is no unhandled-node failure mode. Composite nodes own their
/// children; atom tokens carry no ownership relation between trees, and two
/// leaves are the same atom exactly when their tokens compare equal.
///
/// `AlwaysTrue` and `AlwaysFalse` are the constant sentinels. They are
/// produced by [`Condition::simplify`] for degenerate results (tautologies,
/// contradictions, constant inputs) and may also be constructed directly;
/// they contribute no atoms.
///
/// Negation holds exactly one child. A negation over several operands has no
/// agreed meaning, so the representation makes it impossible to build rather
/// than assigning one.
///
/// # Examples
///
/// ```
/// use quine_logic::Condition;
///
/// let a = Condition::atom("a");
/// let b = Condition::atom("b");
///
/// // Combinators clone their inputs, so values stay usable
/// let expr = a.and(&b.or(&a.not()));
/// assert_eq!(expr.to_string(), "(a && (b || !a))");
///
/// // Variants can also be constructed directly, e.g. for n-ary nodes
/// let any = Condition::Or(vec![a.clone(), b.clone(), Condition::AlwaysFalse]);
/// assert_eq!(any.to_string(), "(a || b || false)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition<T> {
    /// Leaf node wrapping a caller token
    Atom(T),
    /// N-ary conjunction; true when every child is true (so empty is true)
    And(Vec<Condition<T>>),
    /// N-ary disjunction; true when any child is true (so empty is false)
    Or(Vec<Condition<T>>),
    /// Negation of exactly one child
    Not(Box<Condition<T>>),
    /// Constant true
    AlwaysTrue,
    /// Constant false
    AlwaysFalse,
}

impl<T> Condition<T> {
    /// Create a leaf condition wrapping the given token
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Condition;
    ///
    /// let ready = Condition::atom("ready");
    /// assert_eq!(ready.to_string(), "ready");
    /// ```
    pub fn atom(token: T) -> Self {
        Condition::Atom(token)
    }

    /// Number of atom occurrences in this tree
    ///
    /// Repeated atoms count once per occurrence; the constant sentinels
    /// count zero. This is the cost measure the minimizer optimizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Condition;
    ///
    /// let a = Condition::atom("a");
    /// let b = Condition::atom("b");
    /// assert_eq!(a.and(&b.or(&a)).literal_count(), 3);
    /// ```
    pub fn literal_count(&self) -> usize {
        match self {
            Condition::Atom(_) => 1,
            Condition::And(children) | Condition::Or(children) => {
                children.iter().map(Condition::literal_count).sum()
            }
            Condition::Not(inner) => inner.literal_count(),
            Condition::AlwaysTrue | Condition::AlwaysFalse => 0,
        }
    }
}
