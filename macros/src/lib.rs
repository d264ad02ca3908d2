//! Declarative-macro sugar over `kanren-core`'s five goal primitives
//! (`eq`, `succeed`, `fail`, `disj`, `conj`, `call_with_fresh`).
//!
//! These macros desugar purely textually — they carry no type information
//! of their own — so every expansion is just plain calls to the primitives
//! in `kanren_core::prelude`. A caller must have that prelude in scope
//! (`use kanren_core::prelude::*;`) before invoking any macro here, the same
//! way `use suiron::*;` is the precondition for that crate's own macros.
//!
//! Unlike the teacher's `proto-vulcan-macros`, this crate has no `syn`,
//! `quote`, or `proc-macro2` dependency: the surface syntax in scope here
//! (`conj!`/`disj!`/`fresh!`/`conde!`/`run!`/`run_all!`) has a contract
//! simple enough to express as token-tree rewrites, with no parsing of a
//! custom goal-expression grammar required.

/// Right-fold a list of goal expressions with `conj`. Zero arguments is
/// `succeed()`, matching the conjunction identity.
///
/// ```ignore
/// conj!(eq(x.clone(), Term::sym("olive")), eq(y.clone(), x.clone()))
/// ```
#[macro_export]
macro_rules! conj {
    () => {
        succeed()
    };
    ($g:expr $(,)?) => {
        $g
    };
    ($g:expr, $($rest:expr),+ $(,)?) => {
        conj($g, conj!($($rest),+))
    };
}

/// Right-fold a list of goal expressions with `disj`. Zero arguments is
/// `fail()`, matching the disjunction identity.
#[macro_export]
macro_rules! disj {
    () => {
        fail()
    };
    ($g:expr $(,)?) => {
        $g
    };
    ($g:expr, $($rest:expr),+ $(,)?) => {
        disj($g, disj!($($rest),+))
    };
}

/// `fresh!([x, y], { g1, g2 })` binds each named variable with a nested
/// `call_with_fresh`, then conjoins the goal body in that scope. The names
/// become ordinary Rust bindings of type `Term` inside the body.
#[macro_export]
macro_rules! fresh {
    ([], { $($g:expr),* $(,)? }) => {
        conj!($($g),*)
    };
    ([$x:ident $(, $rest:ident)* $(,)?], { $($g:expr),* $(,)? }) => {
        call_with_fresh(Some(stringify!($x)), move |$x| {
            fresh!([$($rest),*], { $($g),* })
        })
    };
}

/// `conde! { [g11, g12], [g21, g22], ... }`: a `disj` of `conj`s, one
/// conjunction per bracketed clause.
#[macro_export]
macro_rules! conde {
    ( $( [ $($g:expr),* $(,)? ] ),* $(,)? ) => {
        disj!( $( conj!($($g),*) ),* )
    };
}

/// `run!(n, [x, y], { g1, g2 })`: mint the query variables, conjoin the
/// body, take up to `n` answers, and reify each one. A single query variable
/// reifies to its own value; two or more reify as a `Term::seq` tuple in the
/// order they were listed.
///
/// The query variables are ordinary `var(name)` bindings, not
/// `call_with_fresh` ones — `run`/`run_all` only need a single application
/// of the goal to `empty_s()`, so there is no need to defer their creation
/// into the goal closure the way a relation's internal fresh variables do.
#[macro_export]
macro_rules! run {
    ($n:expr, [$x:ident], { $($g:expr),* $(,)? }) => {{
        let $x = var(Some(stringify!($x)));
        let query = conj!($($g),*);
        let answers = take($n, query(Substitution::empty()));
        answers.iter().map(|s| reify(&$x, s)).collect::<Vec<Term>>()
    }};
    ($n:expr, [$($x:ident),+ $(,)?], { $($g:expr),* $(,)? }) => {{
        $(let $x = var(Some(stringify!($x)));)+
        let query = conj!($($g),*);
        let answers = take($n, query(Substitution::empty()));
        let __query_vars = Term::seq(vec![$($x.clone()),+]);
        answers.iter().map(|s| reify(&__query_vars, s)).collect::<Vec<Term>>()
    }};
}

/// `run_all!([x, y], { g1, g2 })`: like `run!` with no bound on the number
/// of answers.
#[macro_export]
macro_rules! run_all {
    ([$x:ident], { $($g:expr),* $(,)? }) => {{
        let $x = var(Some(stringify!($x)));
        let query = conj!($($g),*);
        let answers = take_all(query(Substitution::empty()));
        answers.iter().map(|s| reify(&$x, s)).collect::<Vec<Term>>()
    }};
    ([$($x:ident),+ $(,)?], { $($g:expr),* $(,)? }) => {{
        $(let $x = var(Some(stringify!($x)));)+
        let query = conj!($($g),*);
        let answers = take_all(query(Substitution::empty()));
        let __query_vars = Term::seq(vec![$($x.clone()),+]);
        answers.iter().map(|s| reify(&__query_vars, s)).collect::<Vec<Term>>()
    }};
}
