//! Drivers: force the lazy stream a goal produces and extract concrete
//! answers. `take`/`take_all` are the only forcers in the kernel; both walk
//! `Suspend -> Suspend` chains with an explicit loop rather than recursion,
//! per the trampolining requirement in the concurrency & resource model.
use crate::goal::Goal;
use crate::stream::Stream;
use crate::subst::Substitution;

/// Force suspensions one step at a time until the stream is `Empty` or
/// `Cons`. An explicit loop, not recursion — the stack does not grow with
/// the depth of the search.
fn force(mut stream: Stream) -> Stream {
    loop {
        match stream {
            Stream::Suspend(_) => stream = stream.force_step(),
            other => return other,
        }
    }
}

/// `take(n, stream)`: the first `n` answers, or fewer if the stream runs
/// out. `n = 0` returns immediately without forcing anything.
pub fn take(n: usize, stream: Stream) -> Vec<Substitution> {
    let mut out = Vec::with_capacity(n.min(16));
    let mut remaining = n;
    let mut current = stream;
    while remaining > 0 {
        match force(current) {
            Stream::Empty => break,
            Stream::Cons(s, rest) => {
                out.push(s);
                remaining -= 1;
                current = *rest;
            }
            Stream::Suspend(_) => unreachable!("force resolves all suspensions"),
        }
    }
    out
}

/// `take_all(stream)`: every answer. Only terminates if the stream is
/// finite — callers with a potentially infinite goal should use `take`.
pub fn take_all(stream: Stream) -> Vec<Substitution> {
    let mut out = Vec::new();
    let mut current = stream;
    loop {
        match force(current) {
            Stream::Empty => break,
            Stream::Cons(s, rest) => {
                out.push(s);
                current = *rest;
            }
            Stream::Suspend(_) => unreachable!("force resolves all suspensions"),
        }
    }
    out
}

/// `run_goal(n, g) = take(n, g(empty_s()))`.
pub fn run_goal(n: usize, g: &Goal) -> Vec<Substitution> {
    take(n, g(Substitution::empty()))
}

/// `run_all(g) = take_all(g(empty_s()))`.
pub fn run_all(g: &Goal) -> Vec<Substitution> {
    take_all(g(Substitution::empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::{conj, disj, eq};
    use crate::stream::{append, append_map};
    use crate::term::Term;
    use crate::var::var;

    #[test]
    fn take_zero_forces_nothing() {
        let x = var(Some("x"));
        let g = eq(x, Term::from(1i64));
        assert!(run_goal(0, &g).is_empty());
    }

    #[test]
    fn take_bounds_an_infinite_disjunction() {
        // A goal that recursively disjuncts with itself, producing an
        // infinite stream of the same answer. `take` must still return
        // exactly `n` answers without looping forever.
        fn always(x: Term) -> crate::goal::Goal {
            let g = eq(x.clone(), Term::sym("found"));
            disj(g, crate::goal::closure(move || always(x.clone())))
        }
        let x = var(Some("x"));
        let g = always(x);
        let answers = run_goal(3, &g);
        assert_eq!(answers.len(), 3);
    }

    #[test]
    fn fairness_infinite_left_yields_right_answer() {
        // disj(G_inf, eq(x, :found)) must surface :found within bounded work
        // even though G_inf never stops failing.
        fn infinite_failure() -> crate::goal::Goal {
            crate::goal::closure(infinite_failure)
        }
        let x = var(Some("x"));
        let g = disj(infinite_failure(), eq(x.clone(), Term::sym("found")));
        let answers = run_goal(1, &g);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].walk(&x), Term::sym("found"));
    }

    #[test]
    fn take_all_terminates_on_finite_stream() {
        let x = var(Some("x"));
        let g = disj(
            eq(x.clone(), Term::sym("olive")),
            eq(x.clone(), Term::sym("oil")),
        );
        assert_eq!(run_all(&g).len(), 2);
    }

    #[test]
    fn unsat_conjunction_yields_no_answers_within_bound() {
        let x = var(Some("x"));
        let g = conj(
            eq(x.clone(), Term::sym("olive")),
            eq(x.clone(), Term::sym("oil")),
        );
        assert!(run_goal(1, &g).is_empty());
    }

    #[test]
    fn append_and_append_map_are_reexported_for_goal_builders() {
        // smoke check that the stream combinators used by `disj`/`conj`
        // remain accessible to callers building custom goals.
        let s = crate::subst::Substitution::empty();
        let a = crate::stream::Stream::unit(s.clone());
        let b = crate::stream::Stream::unit(s);
        let combined = append(a, b);
        assert_eq!(take_all(combined).len(), 2);
        let x = var(Some("x"));
        let g = eq(x, Term::from(1i64));
        let s = crate::subst::Substitution::empty();
        let bound = append_map(g, crate::stream::Stream::unit(s));
        assert_eq!(take_all(bound).len(), 1);
    }
}
