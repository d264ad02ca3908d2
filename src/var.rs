//! Variable factory: mints fresh logic variables with process-unique identity.
use crate::term::{Term, VarId};
use std::sync::atomic::{AtomicU64, Ordering};

static UNIQUE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

const DEFAULT_NAME: &str = "unnamed";

/// Mint a fresh variable. `name` is display-only and never participates in
/// equality, hashing, or unification — only `id` does.
pub fn var(name: Option<&str>) -> Term {
    let id = VarId(UNIQUE_ID_COUNTER.fetch_add(1, Ordering::SeqCst));
    Term::var(id, name.unwrap_or(DEFAULT_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_vars_have_distinct_identity() {
        let a = var(Some("x"));
        let b = var(Some("x"));
        assert_ne!(a, b);
    }

    #[test]
    fn default_name_is_unnamed() {
        match var(None) {
            Term::Var(_, name) => assert_eq!(&*name, DEFAULT_NAME),
            _ => unreachable!(),
        }
    }
}
