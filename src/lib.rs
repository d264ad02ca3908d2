//! An embeddable relational/logic-programming evaluation kernel in the
//! miniKanren family: a host composes [`goal::Goal`]s over [`term::Term`]s
//! and drives them with [`driver`] to enumerate [`subst::Substitution`]s,
//! which [`reify::reify`] renders back into ground terms.
//!
//! The crate is the kernel only — term model, unification, the lazy answer
//! stream, the five-primitive goal algebra, and the drivers/reifier built on
//! top of them. Surface syntax (`conj!`/`disj!`/`fresh!`/`conde!`/`run!`) is
//! sugar over this kernel, provided by the companion `kanren-macros` crate.
#[macro_use]
extern crate kanren_macros;

pub mod driver;
pub mod error;
pub mod goal;
pub mod reify;
pub mod relation;
pub mod stream;
pub mod subst;
pub mod term;
pub mod unify;
pub mod var;

/// The public surface most host programs need: the five goal primitives,
/// the term/variable/substitution types, and the drivers and reifier.
pub mod prelude {
    pub use crate::driver::{run_all, run_goal, take, take_all};
    pub use crate::goal::{
        call_with_fresh, closure, conj, conj_many, disj, disj_many, eq, fail, succeed, Goal,
    };
    pub use crate::reify::{reify, walk_all};
    pub use crate::subst::Substitution;
    pub use crate::term::Term;
    pub use crate::unify::unify;
    pub use crate::var::var;

    pub use kanren_macros::{conde, conj, disj, fresh, run, run_all};
}
