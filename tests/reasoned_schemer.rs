//! End-to-end scenarios, one per concrete example in the book-style test
//! list: a ground query fed through `run!`/`run_all!` and checked against
//! its reified answer, rather than against intermediate substitutions.
#[macro_use]
extern crate kanren_macros;
use kanren_core::prelude::*;
use kanren_core::relation::{appendo, membero};

#[test]
fn single_equality() {
    let results = run_all!([x], { eq(x.clone(), Term::sym("olive")) });
    assert_eq!(results, vec![Term::sym("olive")]);
}

#[test]
fn disjunction_of_two_facts() {
    let results = run_all!([x], {
        disj!(
            eq(x.clone(), Term::sym("olive")),
            eq(x.clone(), Term::sym("oil"))
        )
    });
    assert_eq!(results, vec![Term::sym("olive"), Term::sym("oil")]);
}

#[test]
fn conjunction_threads_a_binding() {
    let results = run_all!([x, y], {
        eq(x.clone(), Term::sym("olive")),
        eq(y.clone(), x.clone())
    });
    assert_eq!(
        results,
        vec![Term::seq(vec![Term::sym("olive"), Term::sym("olive")])]
    );
}

#[test]
fn unsatisfiable_conjunction_bounded_by_run() {
    let results = run!(1, [x], {
        eq(x.clone(), Term::sym("olive")),
        eq(x.clone(), Term::sym("oil"))
    });
    assert!(results.is_empty());
}

#[test]
fn nested_term_unification_propagates_bindings() {
    // x == [y, 1]; y == 2 -> [[2, 1], 2]
    let results = run_all!([x, y], {
        eq(x.clone(), Term::seq(vec![y.clone(), Term::from(1i64)])),
        eq(y.clone(), Term::from(2i64))
    });
    assert_eq!(
        results,
        vec![Term::seq(vec![
            Term::seq(vec![Term::from(2i64), Term::from(1i64)]),
            Term::from(2i64)
        ])]
    );
}

#[test]
fn occurs_check_rejects_a_self_containing_term() {
    // x == [x] -> []
    let results = run_all!([x], { eq(x.clone(), Term::seq(vec![x.clone()])) });
    assert!(results.is_empty());
}

#[test]
fn conde_reifies_an_unbound_placeholder() {
    // conde { [x == :garlic, y == x]; [y == :oil] } -> [[:garlic, :garlic], [_0, :oil]]
    let results = run_all!([x, y], {
        conde! {
            [eq(x.clone(), Term::sym("garlic")), eq(y.clone(), x.clone())],
            [eq(y.clone(), Term::sym("oil"))],
        }
    });
    assert_eq!(
        results,
        vec![
            Term::seq(vec![Term::sym("garlic"), Term::sym("garlic")]),
            Term::seq(vec![Term::sym("_0"), Term::sym("oil")]),
        ]
    );
}

#[test]
fn unify_examples() {
    let s = Substitution::empty();
    assert!(unify(&Term::sym("foo"), &Term::sym("bar"), &s).is_err());

    let x = var(Some("x"));
    let y = var(Some("y"));
    let s = s.extend(&y, Term::seq(vec![Term::from(1i64)])).unwrap();
    let s2 = unify(&Term::seq(vec![x.clone()]), &y, &s).unwrap();
    assert_eq!(s2.walk(&x), Term::from(1i64));
}

#[test]
fn fairness_surfaces_the_finite_branch_within_a_bound() {
    // disj(G_inf, x == :found) must still yield :found under take(1, ...).
    fn infinite_failure() -> Goal {
        closure(infinite_failure)
    }
    let x = var(Some("x"));
    let g = disj(infinite_failure(), eq(x.clone(), Term::sym("found")));
    let answers = run_goal(1, &g);
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].walk(&x), Term::sym("found"));
}

#[test]
fn membero_and_appendo_compose_inside_run_all() {
    let list = Term::seq(vec![Term::from(1i64), Term::from(2i64), Term::from(3i64)]);
    let results = run_all!([q], { membero(q.clone(), list.clone()) });
    assert_eq!(
        results,
        vec![Term::from(1i64), Term::from(2i64), Term::from(3i64)]
    );

    let results = run_all!([q], {
        appendo(
            Term::seq(vec![Term::from(1i64), Term::from(2i64)]),
            Term::seq(vec![Term::from(3i64)]),
            q.clone()
        )
    });
    assert_eq!(
        results,
        vec![Term::seq(vec![
            Term::from(1i64),
            Term::from(2i64),
            Term::from(3i64)
        ])]
    );
}

#[test]
fn fresh_macro_introduces_a_locally_scoped_variable() {
    let g = fresh!([mid], {
        eq(mid.clone(), Term::sym("olive"))
    });
    assert_eq!(run_all(&g).len(), 1);
}
