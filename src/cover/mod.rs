//! Sum-of-products covers
//!
//! A [`Cover`] is an ordered set of implicants ([`Cube`]s) whose disjunction
//! represents a boolean function: the shape the minimizer works in before a
//! result is rebuilt as an expression tree. The positions inside every cube
//! refer to the candidate ordering of the expression the cover came from.
//!
//! Covers are produced by [`Condition::minimal_cover`] and consumed by
//! [`Condition::simplify`]; they are exposed for callers that want to
//! inspect the selected implicants directly (term counts, literal counts,
//! PLA-style dumps) without rebuilding a tree.
//!
//! [`Condition::minimal_cover`]: crate::Condition::minimal_cover
//! [`Condition::simplify`]: crate::Condition::simplify

mod cubes;
mod primes;
mod select;

pub use cubes::Cube;
pub(crate) use primes::prime_implicants;
pub(crate) use select::select_cover;

/// An ordered set of implicants over one candidate ordering
///
/// The cube order is the cover's term order: essentials first, then greedy
/// picks, exactly as selected. Two degenerate shapes encode the constant
/// functions: a cover with no cubes is the constant false, and a cover
/// containing a cube with no fixed literals is the constant true.
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
/// // (a && b) || (a && !b) collapses to the single implicant "a"
/// let expr = a.and(&b).or(&a.and(&b.not()));
/// let cover = expr.minimal_cover()?;
/// assert_eq!(cover.num_cubes(), 1);
/// assert_eq!(cover.cubes()[0].to_string(), "1-");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    width: usize,
    cubes: Vec<Cube>,
}

impl Cover {
    pub(crate) fn new(width: usize, cubes: Vec<Cube>) -> Self {
        Cover { width, cubes }
    }

    /// Number of candidate positions every cube spans
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of implicants in the cover
    pub fn num_cubes(&self) -> usize {
        self.cubes.len()
    }

    /// The implicants, in cover order
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Total fixed literals across all implicants
    pub fn literal_count(&self) -> usize {
        self.cubes.iter().map(Cube::literal_count).sum()
    }
}
