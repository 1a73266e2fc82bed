//! Expression construction and evaluation walkthrough

use quine_logic::{expr, Condition, SimplifyError};
use std::collections::HashMap;

fn main() -> Result<(), SimplifyError> {
    println!("Boolean Expression Construction Example\n");

    // Three equivalent ways to build (a && b) || !c
    let a = Condition::atom("a");
    let b = Condition::atom("b");
    let c = Condition::atom("c");

    let with_methods = a.and(&b).or(&c.not());
    let with_operators = &(&a & &b) | &!&c;
    let with_macro = expr!(a * b + !c);

    println!("Methods:   {}", with_methods);
    println!("Operators: {}", with_operators);
    println!("Macro:     {}", with_macro);
    assert_eq!(with_methods, with_operators);
    assert_eq!(with_methods, with_macro);

    // Evaluation needs a total assignment over the atoms
    let mut assignment = HashMap::new();
    assignment.insert("a", true);
    assignment.insert("b", false);
    assignment.insert("c", true);
    println!("\nUnder a=1, b=0, c=1: {:?}", with_methods.evaluate(&assignment));

    // Semantic comparison is separate from structural equality
    let commuted = b.and(&a).or(&c.not());
    println!("\nStructurally equal to commuted form: {}", with_methods == commuted);
    println!(
        "Logically equivalent to commuted form: {}",
        with_methods.equivalent_to(&commuted)?
    );

    Ok(())
}
