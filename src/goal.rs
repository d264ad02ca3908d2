//! The goal algebra: `eq`, `succeed`, `fail`, `disj`, `conj`, and
//! `call_with_fresh` are the five primitives every goal, however built up
//! by the host's surface syntax, ultimately desugars to.
use crate::stream::{append, append_map, Stream};
use crate::subst::Substitution;
use crate::term::Term;
use crate::unify::unify;
use crate::var;
use std::rc::Rc;

/// A goal is a pure function from a substitution to a lazy stream of
/// substitutions. `Rc` makes goals cheaply cloneable, which `disj`/`conj`
/// need in order to apply the same goal to more than one input state.
pub type Goal = Rc<dyn Fn(Substitution) -> Stream>;

fn goal(f: impl Fn(Substitution) -> Stream + 'static) -> Goal {
    Rc::new(f)
}

/// Always succeeds, producing the input substitution unchanged.
pub fn succeed() -> Goal {
    goal(|s| Stream::unit(s))
}

/// Never succeeds.
pub fn fail() -> Goal {
    goal(|_s| Stream::empty())
}

/// Succeeds with `unify(u, v, s)` if it holds, otherwise produces no
/// answers.
pub fn eq(u: Term, v: Term) -> Goal {
    goal(move |s| match unify(&u, &v, &s) {
        Ok(s2) => Stream::unit(s2),
        Err(_) => Stream::empty(),
    })
}

/// `disj(g1, g2): s ↦ append(g1(s), g2(s))` — both branches run against the
/// same input substitution; `append`'s interleaving is what keeps this fair
/// when one side is an infinite stream.
pub fn disj(g1: Goal, g2: Goal) -> Goal {
    goal(move |s| append(g1(s.clone()), g2(s)))
}

/// `conj(g1, g2): s ↦ append_map(g2, g1(s))` — every answer `g1` produces is
/// threaded through `g2`.
pub fn conj(g1: Goal, g2: Goal) -> Goal {
    goal(move |s| append_map(g2.clone(), g1(s)))
}

/// `call_with_fresh(name, f): s ↦ f(Var.new(name))(s)`.
pub fn call_with_fresh(name: Option<&'static str>, f: impl Fn(Term) -> Goal + 'static) -> Goal {
    goal(move |s| {
        let v = var::var(name);
        f(v)(s)
    })
}

/// Delay construction of a goal until it is actually applied to a
/// substitution, and suspend that application in the stream.
///
/// `disj`/`conj` apply their operands eagerly (§4.F), so a goal that
/// recurses into itself directly — as every relation in `relation` does —
/// would overflow the Rust call stack before producing a single answer.
/// Wrapping the recursive call in `closure` turns it into a `Stream::Suspend`
/// node instead, which `take`'s trampoline unwinds one step at a time. This
/// mirrors the teacher's `Closure` operator, whose `solve` also defers
/// building the inner goal until it is stepped.
pub fn closure(f: impl Fn() -> Goal + 'static) -> Goal {
    goal(move |s| Stream::suspend(move || f()(s)))
}

/// Right-fold a list of goals with `disj`; the empty list is `fail` (the
/// identity for disjunction — no branch, no answers), matching the monoid
/// law `disj(g, fail) ≡ g`.
pub fn disj_many(goals: Vec<Goal>) -> Goal {
    let mut iter = goals.into_iter().rev();
    match iter.next() {
        None => fail(),
        Some(last) => iter.fold(last, |acc, g| disj(g, acc)),
    }
}

/// Right-fold a list of goals with `conj`; the empty list is `succeed` (the
/// identity for conjunction).
pub fn conj_many(goals: Vec<Goal>) -> Goal {
    let mut iter = goals.into_iter().rev();
    match iter.next() {
        None => succeed(),
        Some(last) => iter.fold(last, |acc, g| conj(g, acc)),
    }
}
