//! Supplemented relations: small goals built on top of the five primitives
//! in `goal`, in the spirit of the teacher's `relation` module. Every
//! recursive relation here goes through `goal::closure` at the recursive
//! call so that an open-ended search (`membero` over a long list, `nevero`)
//! unwinds through the driver's trampoline instead of the Rust call stack.
//!
//! `Seq` is a fixed-length sequence (see `term::Term`), so these relations
//! require their list argument to already be walked to a concrete `Seq` —
//! there is no representation for an open list with an unbound tail.
use crate::goal::{call_with_fresh, closure, conj, disj, eq, Goal};
use crate::term::Term;

/// A relation that succeeds. Wraps `goal::succeed` under the `relation`
/// namespace, matching the teacher's `relation::succeed`/`relation::fail`
/// pair.
pub fn succeed() -> Goal {
    crate::goal::succeed()
}

/// A relation that fails.
pub fn fail() -> Goal {
    crate::goal::fail()
}

/// `conso(first, rest, out)`: `out` is `rest` with `first` prepended.
/// `rest` must walk to a `Seq`.
pub fn conso(first: Term, rest: Term, out: Term) -> Goal {
    goal_fn(move |s| {
        let rest_w = s.walk(&rest);
        match rest_w {
            Term::Seq(items) => {
                let mut full = Vec::with_capacity(items.len() + 1);
                full.push(first.clone());
                full.extend(items.iter().cloned());
                eq(out.clone(), Term::seq(full))(s)
            }
            _ => fail()(s),
        }
    })
}

/// `firsto(list, first)`: `first` is the head of `list`. Fails on `[]`.
pub fn firsto(list: Term, first: Term) -> Goal {
    goal_fn(move |s| {
        let list_w = s.walk(&list);
        match list_w {
            Term::Seq(items) if !items.is_empty() => eq(first.clone(), items[0].clone())(s),
            _ => fail()(s),
        }
    })
}

/// `resto(list, rest)`: `rest` is `list` without its first element.
pub fn resto(list: Term, rest: Term) -> Goal {
    goal_fn(move |s| {
        let list_w = s.walk(&list);
        match list_w {
            Term::Seq(items) if !items.is_empty() => {
                eq(rest.clone(), Term::seq(items[1..].to_vec()))(s)
            }
            _ => fail()(s),
        }
    })
}

/// `emptyo(s)`: `s` is the empty sequence. Equivalent to `s == []`.
pub fn emptyo(s: Term) -> Goal {
    eq(s, Term::seq(vec![]))
}

/// `membero(x, list)`: `x` is some element of `list`.
///
/// Recurses on the tail, delayed through `closure` so a long or (via
/// `disj` with other branches) unbounded search still trampolines.
pub fn membero(x: Term, list: Term) -> Goal {
    goal_fn(move |s| {
        let list_w = s.walk(&list);
        match list_w {
            Term::Seq(items) if items.is_empty() => fail()(s),
            Term::Seq(items) => {
                let head = items[0].clone();
                let tail = Term::seq(items[1..].to_vec());
                let x2 = x.clone();
                disj(
                    eq(x.clone(), head),
                    closure(move || membero(x2.clone(), tail.clone())),
                )(s)
            }
            _ => fail()(s),
        }
    })
}

/// `appendo(l, s, ls)`: `ls` is `l` appended with `s`.
///
/// Ported from the teacher's `appendo`: the base case matches `l == []`
/// and unifies `s` with `ls` directly. The recursive case peels one element
/// off `l`, recurses on the remainder into a fresh `tail` variable, and
/// only then builds `ls` by `conso`-ing the peeled element onto `tail`.
/// `tail` is resolved by the time `conso` walks it because `conj` runs its
/// first goal to completion before its second. This is what lets `ls` be
/// an unbound output (the teacher's own `appendo([1, 2, 3], [4, 5], q)`
/// doctest), unlike matching `ls` against an already-concrete shape, which
/// only ever verifies a fully ground `ls` and never constructs one.
pub fn appendo(l: Term, s_arg: Term, ls: Term) -> Goal {
    goal_fn(move |s| {
        let l_w = s.walk(&l);
        match l_w {
            Term::Seq(items) if items.is_empty() => eq(s_arg.clone(), ls.clone())(s),
            Term::Seq(items) => {
                let head = items[0].clone();
                let l_rest = Term::seq(items[1..].to_vec());
                let s_arg2 = s_arg.clone();
                let ls2 = ls.clone();
                call_with_fresh(Some("appendo_tail"), move |tail| {
                    let l_rest = l_rest.clone();
                    let s_arg2 = s_arg2.clone();
                    let tail2 = tail.clone();
                    conj(
                        closure(move || appendo(l_rest.clone(), s_arg2.clone(), tail2.clone())),
                        conso(head.clone(), tail.clone(), ls2.clone()),
                    )
                })(s)
            }
            _ => fail()(s),
        }
    })
}

/// A relation that fails an unbounded number of times. May diverge if its
/// stream is drained with `take_all`; bound with `take` instead.
pub fn nevero() -> Goal {
    closure(nevero)
}

/// A relation that succeeds an unbounded number of times.
pub fn alwayso() -> Goal {
    disj(succeed(), closure(alwayso))
}

/// Wrap an arbitrary closure as a `Goal`. The relations above need to
/// inspect the walked shape of their arguments at solve time (to decide
/// which branch of `conso`/`membero`/`appendo` applies), which the five
/// primitives in `goal` don't expose directly.
fn goal_fn(f: impl Fn(crate::subst::Substitution) -> crate::stream::Stream + 'static) -> Goal {
    std::rc::Rc::new(f)
}
