use std::collections::HashMap;
use std::collections::HashSet;

use proplogic_core::{atomics, interpretation, EvalError, Formula};

fn p() -> Formula {
    Formula::atomic("p")
}

fn q() -> Formula {
    Formula::atomic("q")
}

/// Evaluate a formula against both accepted interpretation forms and assert they agree.
fn interpret_both(formula: &Formula, assignments: &[(&'static str, bool)]) -> Result<bool, EvalError> {
    let map: HashMap<&str, bool> = assignments.iter().copied().collect();
    let from_map = formula.interpret(&map);

    let inline = match assignments {
        [] => formula.interpret(&interpretation! {}),
        [(name, a)] if *name == "p" => formula.interpret(&interpretation! { p: *a }),
        [(name, a)] if *name == "q" => formula.interpret(&interpretation! { q: *a }),
        [(_, a), (_, b)] => formula.interpret(&interpretation! { p: *a, q: *b }),
        _ => from_map.clone(),
    };

    assert_eq!(from_map, inline, "map and inline interpretations disagree");
    from_map
}

fn missing(name: &str) -> Result<bool, EvalError> {
    Err(EvalError::MissingVariable(name.to_string()))
}

#[test]
fn not_truth_table() {
    let formula = !p();

    assert_eq!(interpret_both(&formula, &[("p", true)]), Ok(false));
    assert_eq!(interpret_both(&formula, &[("p", false)]), Ok(true));
}

#[test]
fn and_truth_table() {
    let formula = p() & q();

    assert_eq!(interpret_both(&formula, &[("p", true), ("q", true)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", true), ("q", false)]), Ok(false));
    assert_eq!(interpret_both(&formula, &[("p", false), ("q", true)]), Ok(false));
    assert_eq!(interpret_both(&formula, &[("p", false), ("q", false)]), Ok(false));
}

#[test]
fn or_truth_table() {
    let formula = p() | q();

    assert_eq!(interpret_both(&formula, &[("p", true), ("q", true)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", true), ("q", false)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", false), ("q", true)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", false), ("q", false)]), Ok(false));
}

#[test]
fn implies_truth_table() {
    let formula = p().implies(q());

    assert_eq!(interpret_both(&formula, &[("p", true), ("q", true)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", true), ("q", false)]), Ok(false));
    assert_eq!(interpret_both(&formula, &[("p", false), ("q", true)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", false), ("q", false)]), Ok(true));
}

#[test]
fn iff_truth_table() {
    let formula = p().iff(q());

    assert_eq!(interpret_both(&formula, &[("p", true), ("q", true)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", true), ("q", false)]), Ok(false));
    assert_eq!(interpret_both(&formula, &[("p", false), ("q", true)]), Ok(false));
    assert_eq!(interpret_both(&formula, &[("p", false), ("q", false)]), Ok(true));
}

#[test]
fn and_short_circuits_on_false_left() {
    let formula = p() & q();

    // A false left operand decides the conjunction; "q" is never looked up.
    assert_eq!(interpret_both(&formula, &[("p", false)]), Ok(false));
    assert_eq!(interpret_both(&formula, &[("p", true)]), missing("q"));
    assert_eq!(interpret_both(&formula, &[]), missing("p"));
    assert_eq!(interpret_both(&formula, &[("q", true)]), missing("p"));
    assert_eq!(interpret_both(&formula, &[("q", false)]), missing("p"));
}

#[test]
fn or_short_circuits_on_true_left() {
    let formula = p() | q();

    assert_eq!(interpret_both(&formula, &[("p", true)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", false)]), missing("q"));
    assert_eq!(interpret_both(&formula, &[]), missing("p"));
    assert_eq!(interpret_both(&formula, &[("q", true)]), missing("p"));
}

#[test]
fn implies_short_circuits_on_false_antecedent() {
    let formula = p().implies(q());

    assert_eq!(interpret_both(&formula, &[("p", false)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", true)]), missing("q"));
    assert_eq!(interpret_both(&formula, &[]), missing("p"));
}

#[test]
fn iff_never_short_circuits() {
    let formula = p().iff(q());

    assert_eq!(interpret_both(&formula, &[("p", true)]), missing("q"));
    assert_eq!(interpret_both(&formula, &[("p", false)]), missing("q"));
    assert_eq!(interpret_both(&formula, &[("q", true)]), missing("p"));
    assert_eq!(interpret_both(&formula, &[("q", false)]), missing("p"));
    assert_eq!(interpret_both(&formula, &[]), missing("p"));
}

#[test]
fn quadruple_negation() {
    let formula = !!!!p();

    assert_eq!(interpret_both(&formula, &[("p", true)]), Ok(true));
    assert_eq!(interpret_both(&formula, &[("p", false)]), Ok(false));
}

#[test]
fn excluded_middle_and_contradiction() {
    let tautology = p() | !p();
    let contradiction = p() & !p();

    for value in [true, false] {
        assert_eq!(interpret_both(&tautology, &[("p", value)]), Ok(true));
        assert_eq!(interpret_both(&contradiction, &[("p", value)]), Ok(false));
    }
}

#[test]
fn modus_ponens_is_a_tautology() {
    // ((p -> q) & p) -> q
    let formula = (p().implies(q()) & p()).implies(q());

    for p_value in [true, false] {
        for q_value in [true, false] {
            let result = interpret_both(&formula, &[("p", p_value), ("q", q_value)]);
            assert_eq!(result, Ok(true), "failed for p={p_value}, q={q_value}");
        }
    }
}

#[test]
fn biconditional_unfolds_to_implications() {
    // (p <-> q) <-> ((p -> q) & (q -> p))
    let formula = p()
        .iff(q())
        .iff(p().implies(q()) & q().implies(p()));

    for p_value in [true, false] {
        for q_value in [true, false] {
            let result = interpret_both(&formula, &[("p", p_value), ("q", q_value)]);
            assert_eq!(result, Ok(true), "failed for p={p_value}, q={q_value}");
        }
    }
}

#[test]
fn failed_evaluation_leaves_formula_reusable() {
    let formula = p() & q();

    assert_eq!(interpret_both(&formula, &[("p", true)]), missing("q"));
    assert_eq!(interpret_both(&formula, &[("p", true), ("q", true)]), Ok(true));
}

#[test]
fn unusual_atomic_names_evaluate() {
    for name in ["", "ANY_NamE", "\\'\"\n\t\u{FFFF}"] {
        let formula = Formula::atomic(name);
        let map = HashMap::from([(name.to_string(), true)]);

        assert_eq!(formula.interpret(&map), Ok(true));
        assert_eq!(
            formula.interpret(&HashMap::<&str, bool>::new()),
            Err(EvalError::MissingVariable(name.to_string())),
        );
    }
}

#[test]
fn rendering_complex_formulas() {
    let modus_ponens = (p().implies(q()) & p()).implies(q());
    assert_eq!(modus_ponens.to_string(), "(((p -> q) & p) -> q)");

    let unfolded = p().iff(q()).iff(p().implies(q()) & q().implies(p()));
    assert_eq!(unfolded.to_string(), "((p <-> q) <-> ((p -> q) & (q -> p)))");

    let cases = p().iff(q()).iff((p() & q()) | (!p() & !q()));
    assert_eq!(cases.to_string(), "((p <-> q) <-> ((p & q) | (~p & ~q)))");
}

#[test]
fn structural_equality_is_not_semantic() {
    assert_ne!(p() & q(), q() & p());
    assert_eq!(p() & q(), p() & q());
}

#[test]
fn formulas_are_usable_as_set_members() {
    let formulas = HashSet::from([p(), !p(), p() & q(), p() | q()]);

    assert!(formulas.contains(&(p() & q())));
    assert!(!formulas.contains(&(q() & p())));
}

#[test]
fn atomics_builds_atomic_formulas() {
    assert_eq!(atomics(" \t\r\n"), vec![]);
    assert_eq!(
        atomics("P Q R"),
        vec![Formula::atomic("P"), Formula::atomic("Q"), Formula::atomic("R")],
    );
}
