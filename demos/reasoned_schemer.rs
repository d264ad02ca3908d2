//! Runs a handful of the book's classic queries through the macro sugar and
//! prints their reified answers, the way the teacher's `examples/simple.rs`
//! exercises its own surface syntax end to end.
#[macro_use]
extern crate kanren_macros;
use kanren_core::prelude::*;
use kanren_core::relation;

fn main() {
    let olive_or_oil = run_all!([x], {
        disj!(
            eq(x.clone(), Term::sym("olive")),
            eq(x.clone(), Term::sym("oil"))
        )
    });
    println!("olive or oil: {:?}", olive_or_oil);

    let garlic_and_oil = run_all!([x, y], {
        conde! {
            [eq(x.clone(), Term::sym("garlic")), eq(y.clone(), x.clone())],
            [eq(y.clone(), Term::sym("oil"))],
        }
    });
    println!("teacupo placeholders: {:?}", garlic_and_oil);

    let membero_results = run_all!([q], {
        relation::membero(q.clone(), Term::seq(vec![Term::from(1i64), Term::from(2i64), Term::from(3i64)]))
    });
    println!("membero over [1 2 3]: {:?}", membero_results);

    let appendo_results = run_all!([q], {
        relation::appendo(
            Term::seq(vec![Term::from(1i64), Term::from(2i64)]),
            Term::seq(vec![Term::from(3i64)]),
            q.clone()
        )
    });
    println!("appendo [1 2] [3]: {:?}", appendo_results);
}
