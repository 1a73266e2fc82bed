//! Basic minimization example

use quine_logic::{expr, Condition, SimplifyError};

fn main() -> Result<(), SimplifyError> {
    println!("Boolean Expression Minimization Example\n");

    println!("Building a redundant expression:");
    println!("  F = (a && b) || (a && b && c) || (a && !a)\n");

    let a = Condition::atom("a");
    let b = Condition::atom("b");
    let c = Condition::atom("c");

    let redundant = a
        .and(&b)
        .or(&a.and(&b).and(&c))
        .or(&a.and(&a.not()));
    println!("As constructed: {}", redundant);

    let minimized = redundant.simplify()?;
    println!("Minimized:      {}", minimized);

    println!("\nDegenerate cases collapse to the constant sentinels:");
    let tautology = expr!("x" + !"x");
    let contradiction = expr!("x" * !"x");
    println!("  {} -> {}", tautology, tautology.simplify()?);
    println!("  {} -> {}", contradiction, contradiction.simplify()?);

    println!("\nAlready-minimal input comes back unchanged:");
    let minimal = expr!("a" * ("b" + "c"));
    println!("  {} -> {}", minimal, minimal.simplify()?);

    Ok(())
}
