//! Minimum-cover selection over prime implicants
//!
//! The second half of the tabulation method. Essential primes (the sole
//! coverer of some minterm) are forced into every valid cover and are taken
//! first; the remaining minterms are covered greedily, always picking the
//! prime with the fewest fixed literals, breaking ties toward the earliest
//! candidate positions. The resulting order is the cover's term order.

use super::{Cover, Cube};
use log::debug;

/// Select a covering subset of the primes, in deterministic cover order
pub(crate) fn select_cover(primes: &[Cube], minterms: &[Vec<bool>], width: usize) -> Cover {
    let mut selected: Vec<usize> = Vec::new();
    let mut covered = vec![false; minterms.len()];

    // Essential primes: any minterm with a single coverer forces that prime.
    let mut essential: Vec<usize> = Vec::new();
    for minterm in minterms {
        let mut coverers = primes
            .iter()
            .enumerate()
            .filter(|(_, prime)| prime.covers(minterm))
            .map(|(index, _)| index);
        if let (Some(index), None) = (coverers.next(), coverers.next()) {
            if !essential.contains(&index) {
                essential.push(index);
            }
        }
    }
    essential.sort_by_key(|&index| primes[index].selection_key());

    for &index in &essential {
        mark_covered(&primes[index], minterms, &mut covered);
        selected.push(index);
    }
    debug!(
        "{} essential prime(s) cover {}/{} minterm(s)",
        essential.len(),
        covered.iter().filter(|&&c| c).count(),
        minterms.len()
    );

    // Greedy phase for whatever the essentials left uncovered.
    while covered.iter().any(|&c| !c) {
        let best = primes
            .iter()
            .enumerate()
            .filter(|(index, prime)| {
                !selected.contains(index) && covers_uncovered(prime, minterms, &covered)
            })
            .min_by_key(|(_, prime)| prime.selection_key());

        match best {
            Some((index, prime)) => {
                mark_covered(prime, minterms, &mut covered);
                selected.push(index);
            }
            None => break,
        }
    }

    debug!("selected cover has {} implicant(s)", selected.len());
    Cover::new(width, selected.iter().map(|&index| primes[index].clone()).collect())
}

fn covers_uncovered(prime: &Cube, minterms: &[Vec<bool>], covered: &[bool]) -> bool {
    minterms
        .iter()
        .zip(covered)
        .any(|(minterm, &done)| !done && prime.covers(minterm))
}

fn mark_covered(prime: &Cube, minterms: &[Vec<bool>], covered: &mut [bool]) {
    for (minterm, slot) in minterms.iter().zip(covered.iter_mut()) {
        if prime.covers(minterm) {
            *slot = true;
        }
    }
}
