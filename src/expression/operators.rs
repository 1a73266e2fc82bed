//! Combinators and operator overloading for condition trees

use super::Condition;
use std::ops::{BitAnd, BitOr, Not};

// Combinator methods
impl<T: Clone> Condition<T> {
    /// Conjunction: a new `And` node over this tree and another
    ///
    /// Pure construction, no simplification: `a.and(&a)` really builds
    /// `(a && a)`. Redundancy is the minimizer's job.
    pub fn and(&self, other: &Condition<T>) -> Condition<T> {
        Condition::And(vec![self.clone(), other.clone()])
    }

    /// Disjunction: a new `Or` node over this tree and another
    pub fn or(&self, other: &Condition<T>) -> Condition<T> {
        Condition::Or(vec![self.clone(), other.clone()])
    }

    /// Negation: a new `Not` node over this tree
    pub fn not(&self) -> Condition<T> {
        Condition::Not(Box::new(self.clone()))
    }
}

/// Conjunction operator for references: `&a & &b`
///
/// The reference form leaves the operands usable afterwards.
///
/// # Examples
///
/// ```
/// use quine_logic::Condition;
///
/// let a = Condition::atom("a");
/// let b = Condition::atom("b");
/// let expr = &a & &b; // Equivalent to a.and(&b)
/// assert_eq!(expr.to_string(), "(a && b)");
/// ```
impl<T: Clone> BitAnd for &Condition<T> {
    type Output = Condition<T>;

    fn bitand(self, rhs: &Condition<T>) -> Condition<T> {
        self.and(rhs)
    }
}

/// Conjunction operator for owned values: `a & b`
///
/// Consumes both operands; prefer `&a & &b` when they are still needed.
impl<T> BitAnd for Condition<T> {
    type Output = Condition<T>;

    fn bitand(self, rhs: Condition<T>) -> Condition<T> {
        Condition::And(vec![self, rhs])
    }
}

/// Disjunction operator for references: `&a | &b`
///
/// # Examples
///
/// ```
/// use quine_logic::Condition;
///
/// let a = Condition::atom("a");
/// let b = Condition::atom("b");
/// let expr = &a | &b; // Equivalent to a.or(&b)
/// assert_eq!(expr.to_string(), "(a || b)");
/// ```
impl<T: Clone> BitOr for &Condition<T> {
    type Output = Condition<T>;

    fn bitor(self, rhs: &Condition<T>) -> Condition<T> {
        self.or(rhs)
    }
}

/// Disjunction operator for owned values: `a | b`
impl<T> BitOr for Condition<T> {
    type Output = Condition<T>;

    fn bitor(self, rhs: Condition<T>) -> Condition<T> {
        Condition::Or(vec![self, rhs])
    }
}

/// Negation operator for references: `!&a`
///
/// # Examples
///
/// ```
/// use quine_logic::Condition;
///
/// let a = Condition::atom("a");
/// let expr = !&a; // Equivalent to a.not()
/// assert_eq!(expr.to_string(), "!a");
/// ```
impl<T: Clone> Not for &Condition<T> {
    type Output = Condition<T>;

    fn not(self) -> Condition<T> {
        Condition::not(self)
    }
}

/// Negation operator for owned values: `!a`
impl<T> Not for Condition<T> {
    type Output = Condition<T>;

    fn not(self) -> Condition<T> {
        Condition::Not(Box::new(self))
    }
}
