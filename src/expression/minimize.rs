//! Simplification of condition trees
//!
//! The pipeline is the classic tabulation method: fix the candidate
//! ordering, materialize the truth table, generate prime implicants, select
//! a minimum cover, and rebuild the cover as a fresh tree. The input tree is
//! never mutated.

use super::Condition;
use crate::cover::{prime_implicants, select_cover, Cover, Cube};
use crate::error::SimplifyError;
use crate::{table, SimplifyOptions};
use log::debug;
use std::fmt;
use std::hash::Hash;

impl<T> Condition<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    /// Rewrite this tree as a minimal, logically equivalent expression
    ///
    /// The result is a sum of products over this tree's own candidates:
    /// an `Or` of `And` terms, each literal a bare or negated atom, with no
    /// redundant terms or literals. Degenerate functions collapse to the
    /// sentinels (`AlwaysTrue` for tautologies, `AlwaysFalse` for
    /// contradictions), single-literal terms are not wrapped in an `And`,
    /// and a single-term cover is not wrapped in an `Or`. Literals appear in
    /// candidate order within each term, and terms in cover-selection order,
    /// so equal inputs produce identical renderings.
    ///
    /// A tree that already spends fewer literals than the minimal sum of
    /// products (for example the factored `(a && (b || c))`) is returned
    /// unchanged rather than expanded.
    ///
    /// Uses default [`SimplifyOptions`]; see
    /// [`simplify_with`](Condition::simplify_with).
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
    /// // Absorption: a && (b || a) is just a
    /// let expr = a.and(&b.or(&a));
    /// assert_eq!(expr.simplify()?.to_string(), "a");
    ///
    /// // The input itself is untouched
    /// assert_eq!(expr.to_string(), "(a && (b || a))");
    /// # Ok(())
    /// # }
    /// ```
    pub fn simplify(&self) -> Result<Condition<T>, SimplifyError> {
        self.simplify_with(&SimplifyOptions::default())
    }

    /// Simplify with explicit options
    pub fn simplify_with(&self, options: &SimplifyOptions) -> Result<Condition<T>, SimplifyError> {
        let candidates = self.candidates();
        let cover = self.cover_over(&candidates, options)?;

        if cover.num_cubes() == 0 {
            return Ok(Condition::AlwaysFalse);
        }
        if cover.cubes().iter().any(|cube| cube.literal_count() == 0) {
            return Ok(Condition::AlwaysTrue);
        }

        let rebuilt = rebuild(&cover, &candidates);
        if self.literal_count() < rebuilt.literal_count() {
            debug!(
                "keeping input: {} literal(s) beats the {}-literal cover",
                self.literal_count(),
                rebuilt.literal_count()
            );
            Ok(self.clone())
        } else {
            Ok(rebuilt)
        }
    }

    /// Compute the minimal sum-of-products cover of this tree
    ///
    /// The cover's cube positions follow [`Condition::candidates`] order.
    /// This is [`simplify`](Condition::simplify) stopped before tree
    /// reconstruction, for callers that want the implicants themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Condition;
    ///
    /// # fn main() -> Result<(), quine_logic::SimplifyError> {
    /// let a = Condition::atom("a");
    /// let b = Condition::atom("b");
    /// let xor = a.and(&b.not()).or(&a.not().and(&b));
    ///
    /// let cover = xor.minimal_cover()?;
    /// assert_eq!(cover.num_cubes(), 2);
    /// assert_eq!(cover.literal_count(), 4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimal_cover(&self) -> Result<Cover, SimplifyError> {
        self.minimal_cover_with(&SimplifyOptions::default())
    }

    /// Compute the minimal cover with explicit options
    pub fn minimal_cover_with(&self, options: &SimplifyOptions) -> Result<Cover, SimplifyError> {
        let candidates = self.candidates();
        self.cover_over(&candidates, options)
    }

    fn cover_over(
        &self,
        candidates: &[&T],
        options: &SimplifyOptions,
    ) -> Result<Cover, SimplifyError> {
        let width = candidates.len();
        if width > options.candidate_limit {
            return Err(SimplifyError::TooManyAtoms {
                count: width,
                limit: options.candidate_limit,
            });
        }

        let minterms = table::minterms(self, candidates)?;
        debug!(
            "{} candidate(s), {} minterm(s) of {} row(s)",
            width,
            minterms.len(),
            1usize << width
        );

        if minterms.is_empty() {
            return Ok(Cover::new(width, Vec::new()));
        }
        if minterms.len() == 1usize << width {
            return Ok(Cover::new(width, vec![Cube::tautology(width)]));
        }

        let primes = prime_implicants(&minterms);
        debug!("{} prime implicant(s)", primes.len());
        Ok(select_cover(&primes, &minterms, width))
    }
}

/// Rebuild a cover as an expression tree over the candidate tokens
///
/// Each cube becomes a term with its literals in ascending candidate order;
/// one-literal terms stay bare, and a one-term cover is returned without an
/// `Or` wrapper.
fn rebuild<T: Clone>(cover: &Cover, candidates: &[&T]) -> Condition<T> {
    let mut terms: Vec<Condition<T>> = Vec::with_capacity(cover.num_cubes());

    for cube in cover.cubes() {
        let mut literals: Vec<Condition<T>> = Vec::new();
        for (index, literal) in cube.literals().iter().enumerate() {
            if let Some(polarity) = literal {
                let atom = Condition::Atom((*candidates[index]).clone());
                literals.push(if *polarity {
                    atom
                } else {
                    Condition::Not(Box::new(atom))
                });
            }
        }
        let term = if literals.len() == 1 {
            literals.remove(0)
        } else {
            Condition::And(literals)
        };
        terms.push(term);
    }

    if terms.len() == 1 {
        terms.remove(0)
    } else {
        Condition::Or(terms)
    }
}
