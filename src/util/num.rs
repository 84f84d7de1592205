use std::num::TryFromIntError;

use crate::{ast::Position, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts a length or source coordinate to a language integer.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use culebra::{ast::Position, util::num::usize_to_i64_checked};
///
/// assert_eq!(usize_to_i64_checked(3, Position::default()).unwrap(), 3);
/// ```
pub fn usize_to_i64_checked(value: usize, position: Position) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_: TryFromIntError| RuntimeError::Overflow { position })
}

/// Converts a language integer to a `usize` if it is non-negative and fits.
///
/// Used for array indices and for reading `__LINE__`/`__COLUMN__` back out of
/// a call environment.
///
/// ## Example
/// ```
/// use culebra::util::num::i64_to_usize;
///
/// assert_eq!(i64_to_usize(2), Some(2));
/// assert_eq!(i64_to_usize(-1), None);
/// ```
#[must_use]
pub fn i64_to_usize(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
