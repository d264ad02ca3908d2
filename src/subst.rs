//! Persistent substitution map: `Var -> Term`, extended without mutating
//! prior versions, so that branching disjunctions can explore alternatives
//! independently (see the design notes on persistent maps).
use crate::error::{UnifyError, UnifyResult};
use crate::term::{Term, VarId};
use std::collections::HashMap;
use std::rc::Rc;

/// A value-typed mapping from variable id to term. Cloning a `Substitution`
/// is O(1) (it clones an `Rc`); `extend` only deep-clones the backing map
/// when some other clone is still alive to observe the old version
/// (`Rc::make_mut`'s copy-on-write), which is how a `disj` branch can extend
/// its own copy while the sibling branch still sees the unextended one.
#[derive(Clone, Debug, Default)]
pub struct Substitution {
    map: Rc<HashMap<VarId, Term>>,
}

impl Substitution {
    /// The identity mapping: `empty_s()`.
    pub fn empty() -> Substitution {
        Substitution {
            map: Rc::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, id: VarId) -> Option<&Term> {
        self.map.get(&id)
    }

    /// Shallow lookup: follows `Var -> Var -> ...` chains until a
    /// non-variable term or an unbound variable is reached. Does not
    /// descend into composites; see `walk_all` in the reifier for the
    /// deep version.
    pub fn walk(&self, term: &Term) -> Term {
        let mut current = term.clone();
        loop {
            match &current {
                Term::Var(id, _) => match self.map.get(id) {
                    Some(next) => current = next.clone(),
                    None => return current,
                },
                _ => return current,
            }
        }
    }

    /// Extend the substitution with `x ↦ v`, rejecting the extension if it
    /// would introduce a cycle (occurs-check). `x` must be an unbound
    /// variable term (callers walk first).
    pub fn extend(&self, x: &Term, v: Term) -> UnifyResult<Substitution> {
        let x_id = match x {
            Term::Var(id, _) => *id,
            _ => panic!("Substitution::extend requires a variable on the left"),
        };
        if self.occurs(x, &v) {
            return Err(UnifyError::Occurs);
        }
        let mut map = Rc::clone(&self.map);
        Rc::make_mut(&mut map).insert(x_id, v);
        let extended = Substitution { map };
        debug_assert!(!extended.occurs(x, &extended.walk(x)));
        Ok(extended)
    }

    /// True iff `x` occurs (recursively, under this substitution) in `v`.
    pub fn occurs(&self, x: &Term, v: &Term) -> bool {
        let walked = self.walk(v);
        match (&walked, x) {
            (Term::Var(a, _), Term::Var(b, _)) => a == b,
            (Term::Seq(items), _) | (Term::Tuple(items), _) => {
                items.iter().any(|child| self.occurs(x, child))
            }
            (Term::Map(entries), _) => entries.values().any(|child| self.occurs(x, child)),
            _ => false,
        }
    }
}
