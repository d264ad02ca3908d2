//! The kernel's closed error taxonomy (see the error handling design notes).
use thiserror::Error;

/// The only failure mode the kernel has: a unification could not be made to
/// hold. `Occurs` is kept as a distinct variant for diagnostics, but callers
/// must not treat it differently from `Mismatch` — both mean "this branch
/// produced zero answers."
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnifyError {
    #[error("terms do not unify")]
    Mismatch,
    #[error("occurs-check failed: variable appears in its own binding")]
    Occurs,
}

pub type UnifyResult<T> = Result<T, UnifyError>;
