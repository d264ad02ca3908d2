//! Structural unification with occurs-check.
use crate::error::{UnifyError, UnifyResult};
use crate::subst::Substitution;
use crate::term::Term;

/// Unify `u` and `v` under `s`, returning the (possibly) extended
/// substitution, or `Err` if no substitution makes them equal.
///
/// Dispatch order: walk both sides, check top-level identity, then variable
/// binding (left before right — the choice is unobservable to callers since
/// subsequent walks resolve through either order), then structural recursion
/// by composite kind.
pub fn unify(u: &Term, v: &Term, s: &Substitution) -> UnifyResult<Substitution> {
    let uw = s.walk(u);
    let vw = s.walk(v);

    if uw == vw {
        // Covers identical atoms/numbers/bools/strings, the same variable
        // unified with itself, and two empty sequences/tuples/maps.
        return Ok(s.clone());
    }

    match (&uw, &vw) {
        (Term::Var(_, _), _) => s.extend(&uw, vw),
        (_, Term::Var(_, _)) => s.extend(&vw, uw),
        (Term::Seq(a), Term::Seq(b)) => unify_slice(a, b, s),
        (Term::Tuple(a), Term::Tuple(b)) => {
            if a.len() != b.len() {
                Err(UnifyError::Mismatch)
            } else {
                unify_slice(a, b, s)
            }
        }
        (Term::Map(a), Term::Map(b)) => {
            if a.len() != b.len() || a.keys().ne(b.keys()) {
                return Err(UnifyError::Mismatch);
            }
            let mut current = s.clone();
            for (key, a_val) in a.iter() {
                let b_val = &b[key];
                current = unify(a_val, b_val, &current)?;
            }
            Ok(current)
        }
        _ => Err(UnifyError::Mismatch),
    }
}

fn unify_slice(a: &[Term], b: &[Term], s: &Substitution) -> UnifyResult<Substitution> {
    if a.len() != b.len() {
        return Err(UnifyError::Mismatch);
    }
    let mut current = s.clone();
    for (x, y) in a.iter().zip(b.iter()) {
        current = unify(x, y, &current)?;
    }
    Ok(current)
}
