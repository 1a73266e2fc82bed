//! End-to-end simplification tests

use quine_logic::{expr, Condition, SimplifyError, SimplifyOptions};
use std::collections::HashMap;
use test_log::test;

#[test]
fn test_empty_conjunction_is_tautology() {
    let empty = Condition::<&str>::And(vec![]);
    assert_eq!(empty.simplify().unwrap(), Condition::AlwaysTrue);
}

#[test]
fn test_empty_disjunction_is_contradiction() {
    let empty = Condition::<&str>::Or(vec![]);
    assert_eq!(empty.simplify().unwrap(), Condition::AlwaysFalse);
}

#[test]
fn test_already_minimal_input_is_returned_unchanged() {
    // A && (B || C) has no cheaper form; the factored input wins over
    // the flat sum of products ((A && B) || (A && C)).
    let a = Condition::atom("A");
    let b = Condition::atom("B");
    let c = Condition::atom("C");
    let condition = a.and(&b.or(&c));

    let simplified = condition.simplify().unwrap();
    assert_eq!(simplified, condition);
    assert_eq!(simplified.to_string(), "(A && (B || C))");
}

#[test]
fn test_absorption_collapses_to_single_atom() {
    // A && (B || A) -> A
    let a = Condition::atom("A");
    let b = Condition::atom("B");
    let condition = a.and(&b.or(&a));

    let simplified = condition.simplify().unwrap();
    assert_eq!(simplified.candidates().len(), 1);
    assert_eq!(simplified.to_string(), "A");
}

#[test]
fn test_duplicate_conjunction_collapses() {
    // A && A -> A
    let a = Condition::atom("A");
    let condition = a.and(&a);

    let simplified = condition.simplify().unwrap();
    assert_eq!(simplified.candidates().len(), 1);
    assert_eq!(simplified.to_string(), "A");
}

#[test]
fn test_contradiction_collapses_to_false() {
    // A && !A -> false
    let a = Condition::atom("A");
    let condition = a.and(&a.not());
    assert_eq!(condition.simplify().unwrap(), Condition::AlwaysFalse);
}

#[test]
fn test_tautology_collapses_to_true() {
    // A || !A -> true
    let a = Condition::atom("A");
    let condition = a.or(&a.not());
    assert_eq!(condition.simplify().unwrap(), Condition::AlwaysTrue);
}

#[test]
fn test_three_atom_reduction() {
    // !(X1 && !X2) || X1 && X3 || X2 && X3 has exactly one false row
    // (X1=1, X2=0, X3=0), so the minimum is one literal per other variable.
    let x1 = Condition::atom("X1");
    let x2 = Condition::atom("X2");
    let x3 = Condition::atom("X3");
    let condition = Condition::Or(vec![
        x1.and(&x2.not()).not(),
        x1.and(&x3),
        x2.and(&x3),
    ]);

    let simplified = condition.simplify().unwrap();
    assert_eq!(simplified.to_string(), "(!X1 || X2 || X3)");
    assert!(condition.equivalent_to(&simplified).unwrap());
}

#[test]
fn test_fluent_chain_reduction() {
    // Candidate order follows first appearance: X2, X3, X1
    let x1 = Condition::atom("X1");
    let x2 = Condition::atom("X2");
    let x3 = Condition::atom("X3");
    let condition = x2
        .and(&x3.not())
        .or(&x1.and(&x3.not()).not())
        .and(&x1.and(&x2.not()).not().or(&x3.not().and(&x1).or(&x2.and(&x3.not()).not())));

    let simplified = condition.simplify().unwrap();
    assert_eq!(simplified.to_string(), "(X2 || X3 || !X1)");
    assert!(condition.equivalent_to(&simplified).unwrap());
}

#[test]
fn test_two_term_reconstruction_order() {
    // XOR stays two terms of two literals; terms are ordered by the
    // deterministic selection key, literals by candidate index.
    let a = Condition::atom("A");
    let b = Condition::atom("B");
    let condition = a.and(&b.not()).or(&a.not().and(&b));

    let simplified = condition.simplify().unwrap();
    assert_eq!(simplified.to_string(), "((!A && B) || (A && !B))");
}

#[test]
fn test_double_negation_is_canonicalized() {
    let a = Condition::atom("A");
    let condition = a.not().not();
    assert_eq!(condition.simplify().unwrap(), a);
}

#[test]
fn test_constant_inputs() {
    assert_eq!(
        Condition::<&str>::AlwaysTrue.simplify().unwrap(),
        Condition::AlwaysTrue
    );
    assert_eq!(
        Condition::<&str>::AlwaysFalse.not().simplify().unwrap(),
        Condition::AlwaysTrue
    );
    let mixed = Condition::<&str>::And(vec![Condition::AlwaysTrue, Condition::AlwaysFalse]);
    assert_eq!(mixed.simplify().unwrap(), Condition::AlwaysFalse);
}

#[test]
fn test_constants_dominate_atoms() {
    // A && false is a contradiction even though A is a candidate
    let a = Condition::atom("A");
    assert_eq!(
        a.and(&Condition::AlwaysFalse).simplify().unwrap(),
        Condition::AlwaysFalse
    );
    assert_eq!(
        a.or(&Condition::AlwaysTrue).simplify().unwrap(),
        Condition::AlwaysTrue
    );
}

#[test]
fn test_simplification_is_idempotent() {
    let samples = vec![
        expr!("a" * !"b" + !"a" * "b"),
        expr!(("a" + "b") * ("c" + !"a")),
        expr!("a" * ("b" + "a") + "c" * "c"),
        expr!(!("a" * !"b")),
    ];

    for condition in samples {
        let once = condition.simplify().unwrap();
        let twice = once.simplify().unwrap();
        assert_eq!(
            once.to_string(),
            twice.to_string(),
            "simplify not idempotent for {}",
            condition
        );
    }
}

#[test]
fn test_simplified_form_is_equivalent_on_every_assignment() {
    let samples = vec![
        expr!("a" * ("b" + "a")),
        expr!("a" * !"b" + !"a" * "b" + "a" * "b"),
        expr!(!("a" * !"b") + "c"),
        expr!(("a" + "b") * ("a" + !"b") * ("c" + "b")),
    ];

    for condition in samples {
        let simplified = condition.simplify().unwrap();
        let candidates = condition.candidates();
        for row in 0..1u32 << candidates.len() {
            let assignment: HashMap<&str, bool> = candidates
                .iter()
                .enumerate()
                .map(|(i, token)| (**token, (row >> (candidates.len() - 1 - i)) & 1 == 1))
                .collect();
            assert_eq!(
                condition.evaluate(&assignment),
                simplified.evaluate(&assignment),
                "{} and {} disagree on {:?}",
                condition,
                simplified,
                assignment
            );
        }
    }
}

#[test]
fn test_minimality_against_exhaustive_small_cases() {
    // For two-variable functions the minimal literal counts are known;
    // spot-check a few against the simplifier's output.
    let a = Condition::atom("a");
    let b = Condition::atom("b");

    // Implication written redundantly: !a || (a && b) -> !a || b
    let implication = a.not().or(&a.and(&b));
    assert_eq!(implication.simplify().unwrap().literal_count(), 2);

    // Consensus: ab + !ac + bc over three variables drops the bc term
    let c = Condition::atom("c");
    let consensus = a.and(&b).or(&a.not().and(&c)).or(&b.and(&c));
    assert_eq!(consensus.simplify().unwrap().literal_count(), 4);
}

#[test]
fn test_boolean_table_matches_known_rows() {
    // A && (B || C)
    let condition = Condition::atom("A").and(&Condition::atom("B").or(&Condition::atom("C")));

    let candidates = condition.candidates();
    let table = condition.boolean_table(&candidates).unwrap();
    assert_eq!(table.len(), 8);

    let expected: Vec<(&str, u8)> = vec![
        ("000", 0),
        ("001", 0),
        ("010", 0),
        ("011", 0),
        ("100", 0),
        ("101", 1),
        ("110", 1),
        ("111", 1),
    ];
    for (key, value) in expected {
        assert_eq!(table[key], value, "row {}", key);
    }
}

#[test]
fn test_minimal_cover_shapes() {
    let a = Condition::atom("a");

    let falsum = a.and(&a.not()).minimal_cover().unwrap();
    assert_eq!(falsum.num_cubes(), 0);

    let verum = a.or(&a.not()).minimal_cover().unwrap();
    assert_eq!(verum.num_cubes(), 1);
    assert_eq!(verum.literal_count(), 0);
}

#[test]
fn test_candidate_limit_fails_fast() {
    let tokens: Vec<String> = (0..25).map(|i| format!("v{}", i)).collect();
    let wide = Condition::Or(tokens.iter().map(|t| Condition::atom(t.clone())).collect());

    assert_eq!(
        wide.simplify(),
        Err(SimplifyError::TooManyAtoms {
            count: 25,
            limit: SimplifyOptions::DEFAULT_CANDIDATE_LIMIT,
        })
    );

    // A tighter explicit limit applies to small expressions too
    let narrow_options = SimplifyOptions { candidate_limit: 1 };
    let a = Condition::atom("a");
    let b = Condition::atom("b");
    assert!(a.and(&b).simplify_with(&narrow_options).is_err());
}
