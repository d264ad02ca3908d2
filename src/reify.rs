//! Reification: rendering a queried term as a ground value, with stable
//! placeholder names (`_0`, `_1`, ...) for variables left unbound.
use crate::subst::Substitution;
use crate::term::Term;

/// Deep walk: `walk` first, then recurse into every child of a composite.
/// Used in place of the shallow `Substitution::walk` whenever the caller
/// needs a tree with no internal variable left un-looked-up.
pub fn walk_all(term: &Term, s: &Substitution) -> Term {
    let walked = s.walk(term);
    match &walked {
        Term::Seq(items) => Term::seq(items.iter().map(|t| walk_all(t, s)).collect()),
        Term::Tuple(items) => Term::tuple(items.iter().map(|t| walk_all(t, s)).collect()),
        Term::Map(entries) => {
            Term::map(entries.iter().map(|(k, v)| (k.clone(), walk_all(v, s))).collect())
        }
        _ => walked,
    }
}

/// Display name for the `k`-th still-unbound variable encountered during
/// reification, in first-encounter order.
fn reify_name(k: usize) -> Term {
    Term::sym(format!("_{}", k))
}

/// Traverse `walk(term, r)` left to right; every unbound variable found
/// extends `r` with a fresh placeholder name. Composites recurse
/// left-to-right, so naming order matches the order the host sees the
/// variables in the query term.
fn reify_s(term: &Term, r: &Substitution) -> Substitution {
    let walked = r.walk(term);
    match &walked {
        Term::Var(_, _) => {
            let name = reify_name(r.len());
            r.extend(&walked, name)
                .expect("reification never introduces a cycle")
        }
        Term::Seq(items) | Term::Tuple(items) => {
            items.iter().fold(r.clone(), |acc, t| reify_s(t, &acc))
        }
        Term::Map(entries) => entries.values().fold(r.clone(), |acc, v| reify_s(v, &acc)),
        _ => r.clone(),
    }
}

/// `reify(v): s ↦ walk_all(v, reify_s(walk_all(v, s), empty_s()))`.
///
/// The result is always ground: every variable that remained unbound under
/// `s` is replaced by a `Sym("_k")` placeholder.
pub fn reify(term: &Term, s: &Substitution) -> Term {
    let deep = walk_all(term, s);
    let naming = reify_s(&deep, &Substitution::empty());
    walk_all(&deep, &naming)
}
