//! The lazy answer stream: `append` (mplus/interleave) and `append_map`
//! (bind) are the two combinators the goal algebra is built from. Their
//! suspensions are the sole source of non-strictness, and the swap inside
//! `append` is what makes disjunctions over infinite streams fair (see the
//! concurrency & resource model notes on suspension points).
use crate::goal::Goal;
use crate::subst::Substitution;

type Thunk = Box<dyn FnOnce() -> Stream>;

/// A lazy, possibly infinite sequence of substitutions.
pub enum Stream {
    Empty,
    Cons(Substitution, Box<Stream>),
    /// A suspended computation. Forcing it (calling the thunk) produces the
    /// next stream shape, which may itself be another `Suspend`.
    Suspend(Thunk),
}

impl Stream {
    pub fn empty() -> Stream {
        Stream::Empty
    }

    pub fn unit(s: Substitution) -> Stream {
        Stream::Cons(s, Box::new(Stream::Empty))
    }

    pub fn cons(s: Substitution, rest: Stream) -> Stream {
        Stream::Cons(s, Box::new(rest))
    }

    pub fn suspend(thunk: impl FnOnce() -> Stream + 'static) -> Stream {
        Stream::Suspend(Box::new(thunk))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Force exactly one layer of suspension, if present. Used by the
    /// driver's trampoline loop so that chains of `Suspend -> Suspend` are
    /// walked iteratively rather than via recursive call frames.
    pub fn force_step(self) -> Stream {
        match self {
            Stream::Suspend(thunk) => thunk(),
            other => other,
        }
    }
}

/// `mplus`: interleave two streams so that both get a chance to produce
/// answers even when `a` is infinite.
///
/// - `append(empty, b) = b`
/// - `append(suspend(t), b) = suspend(|| append(b, t()))` — the swap.
/// - `append(cons(h, r), b) = cons(h, append(r, b))`
pub fn append(a: Stream, b: Stream) -> Stream {
    match a {
        Stream::Empty => b,
        Stream::Suspend(t) => Stream::suspend(move || append(b, t())),
        Stream::Cons(h, r) => Stream::cons(h, append(*r, b)),
    }
}

/// `bind`: apply `goal` to every substitution produced by `stream`,
/// concatenating the resulting streams with `append` so the interleaving
/// stays fair.
///
/// - `append_map(g, empty) = empty`
/// - `append_map(g, suspend(t)) = suspend(|| append_map(g, t()))`
/// - `append_map(g, cons(s, r)) = append(g(s), append_map(g, r))`
pub fn append_map(goal: Goal, stream: Stream) -> Stream {
    match stream {
        Stream::Empty => Stream::Empty,
        Stream::Suspend(t) => {
            let goal = goal.clone();
            Stream::suspend(move || append_map(goal, t()))
        }
        Stream::Cons(s, r) => {
            let head = goal(s);
            let goal2 = goal.clone();
            append(head, append_map(goal2, *r))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::{eq, succeed};
    use crate::var::var;

    #[test]
    fn append_empty_left_returns_right() {
        let b = Stream::unit(Substitution::empty());
        let result = append(Stream::empty(), b);
        assert!(!result.is_empty());
    }

    #[test]
    fn append_cons_prepends_head() {
        let s = Substitution::empty();
        let a = Stream::cons(s.clone(), Stream::empty());
        let b = Stream::unit(s);
        let mut result = append(a, b);
        let mut count = 0;
        loop {
            result = result.force_step();
            match result {
                Stream::Empty => break,
                Stream::Cons(_, rest) => {
                    count += 1;
                    result = *rest;
                }
                Stream::Suspend(_) => unreachable!("force_step resolves suspensions"),
            }
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn append_map_with_failing_goal_drains_to_empty() {
        let s = Substitution::empty();
        let x = var(Some("x"));
        let stream = Stream::unit(s);
        let g = eq(x.clone(), crate::term::Term::from(1i64));
        let g2 = eq(x, crate::term::Term::from(2i64));
        let bound = append_map(g, stream);
        let bound = append_map(g2, bound);
        let mut result = bound;
        loop {
            result = result.force_step();
            match result {
                Stream::Empty => break,
                Stream::Cons(_, rest) => result = *rest,
                Stream::Suspend(_) => unreachable!(),
            }
        }
    }

    #[test]
    fn append_map_preserves_succeed() {
        let s = Substitution::empty();
        let stream = Stream::unit(s);
        let g = succeed();
        let mut result = append_map(g, stream);
        let mut count = 0;
        loop {
            result = result.force_step();
            match result {
                Stream::Empty => break,
                Stream::Cons(_, rest) => {
                    count += 1;
                    result = *rest;
                }
                Stream::Suspend(_) => unreachable!(),
            }
        }
        assert_eq!(count, 1);
    }
}
