//! Prime-implicant generation
//!
//! The first half of the tabulation method: starting from the minterm
//! cubes, repeatedly combine pairs that differ in exactly one fixed
//! position, freeing that position, until no round produces a new cube. A
//! cube that never combined in the round it was produced cannot be
//! generalized further and is a prime implicant.

use super::Cube;
use log::trace;

/// Compute all prime implicants of the function given by its minterms
///
/// Input and output orders are deterministic: minterms arrive in row order,
/// merged cubes are produced in pair-scan order with duplicates dropped, and
/// primes are emitted in the order they are proven prime.
pub(crate) fn prime_implicants(minterms: &[Vec<bool>]) -> Vec<Cube> {
    let mut current: Vec<Cube> = minterms.iter().map(|bits| Cube::from_minterm(bits)).collect();
    let mut primes: Vec<Cube> = Vec::new();
    let mut round = 0;

    while !current.is_empty() {
        round += 1;
        let mut combined = vec![false; current.len()];
        let mut next: Vec<Cube> = Vec::new();

        for i in 0..current.len() {
            for j in (i + 1)..current.len() {
                if let Some(merged) = current[i].merge(&current[j]) {
                    combined[i] = true;
                    combined[j] = true;
                    if !next.contains(&merged) {
                        next.push(merged);
                    }
                }
            }
        }

        for (cube, was_combined) in current.iter().zip(&combined) {
            if !was_combined {
                primes.push(cube.clone());
            }
        }

        trace!(
            "merge round {}: {} cube(s) in, {} out, {} prime(s) so far",
            round,
            current.len(),
            next.len(),
            primes.len()
        );
        current = next;
    }

    primes
}
