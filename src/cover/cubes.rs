//! Cube type: a single product term over the candidate ordering

use std::fmt;

/// One implicant of a boolean function
///
/// A cube fixes some candidate positions and leaves the rest free:
///
/// - `Some(true)` - the candidate appears as a positive literal
/// - `Some(false)` - the candidate appears negated
/// - `None` - don't care; the candidate does not appear in the term
///
/// Positions follow the candidate list the cube was built against, so a
/// cube is only meaningful next to its ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    literals: Vec<Option<bool>>,
}

impl Cube {
    /// Cube fixing every position to the given minterm's bits
    pub(crate) fn from_minterm(bits: &[bool]) -> Self {
        Cube {
            literals: bits.iter().map(|&bit| Some(bit)).collect(),
        }
    }

    /// Cube leaving every position free (covers every row)
    pub(crate) fn tautology(width: usize) -> Self {
        Cube {
            literals: vec![None; width],
        }
    }

    /// Number of candidate positions (fixed or free)
    pub fn width(&self) -> usize {
        self.literals.len()
    }

    /// The per-position literals
    ///
    /// Returns a slice where each element is `Some(polarity)` for a fixed
    /// position and `None` for a free one.
    pub fn literals(&self) -> &[Option<bool>] {
        &self.literals
    }

    /// Number of fixed positions
    pub fn literal_count(&self) -> usize {
        self.literals.iter().filter(|l| l.is_some()).count()
    }

    /// Whether this cube covers the given row: every fixed position agrees
    pub fn covers(&self, bits: &[bool]) -> bool {
        self.literals
            .iter()
            .zip(bits)
            .all(|(literal, &bit)| match literal {
                Some(polarity) => *polarity == bit,
                None => true,
            })
    }

    /// Combine two cubes that differ in exactly one fixed position
    ///
    /// Both cubes must leave the same positions free; the differing position
    /// becomes free in the result. Returns `None` when the cubes are not
    /// combinable.
    pub(crate) fn merge(&self, other: &Cube) -> Option<Cube> {
        if self.width() != other.width() {
            return None;
        }

        let mut differing = None;
        for (position, (left, right)) in self.literals.iter().zip(&other.literals).enumerate() {
            match (left, right) {
                (None, None) => {}
                (Some(a), Some(b)) if a == b => {}
                (Some(_), Some(_)) => {
                    if differing.is_some() {
                        return None;
                    }
                    differing = Some(position);
                }
                // Free on one side only: different don't-care patterns
                _ => return None,
            }
        }

        let position = differing?;
        let mut literals = self.literals.clone();
        literals[position] = None;
        Some(Cube { literals })
    }

    /// Deterministic ordering key for cover selection
    ///
    /// Orders by fewest fixed literals, then by the fixed positions
    /// (earliest candidate index first), then by the literal polarities
    /// (negated before positive). Two distinct cubes never compare equal
    /// under this key.
    pub(crate) fn selection_key(&self) -> (usize, Vec<usize>, Vec<bool>) {
        let positions: Vec<usize> = self
            .literals
            .iter()
            .enumerate()
            .filter_map(|(position, literal)| literal.map(|_| position))
            .collect();
        let bits: Vec<bool> = self.literals.iter().filter_map(|literal| *literal).collect();
        (self.literal_count(), positions, bits)
    }
}

/// PLA-style rendering: `'0'`, `'1'`, or `'-'` per position
///
/// # Examples
///
/// ```
/// use quine_logic::Condition;
///
/// # fn main() -> Result<(), quine_logic::SimplifyError> {
/// let a = Condition::atom("a");
/// let b = Condition::atom("b");
/// let cover = a.and(&b.not()).minimal_cover()?;
/// assert_eq!(cover.cubes()[0].to_string(), "10");
/// # Ok(())
/// # }
/// ```
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for literal in &self.literals {
            let symbol = match literal {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
