//! Truth-table walkthrough

use quine_logic::{Condition, SimplifyError};

fn main() -> Result<(), SimplifyError> {
    println!("Truth Table Example\n");

    let a = Condition::atom("A");
    let b = Condition::atom("B");
    let c = Condition::atom("C");
    let expr = a.and(&b.or(&c));

    let candidates = expr.candidates();
    println!("Expression: {}", expr);
    println!("Candidates: {:?}\n", candidates);

    // One row per assignment; the first candidate is the leftmost bit
    let table = expr.boolean_table(&candidates)?;
    for (row, value) in &table {
        println!("  {} -> {}", row, value);
    }

    println!("\nMinimal cover, one implicant per line (PLA-style):");
    for cube in expr.minimal_cover()?.cubes() {
        println!("  {}", cube);
    }

    Ok(())
}
