//! Error types for curried functions.

/// Represents errors that can occur when continuing a curried call chain.
///
/// # Examples
///
/// ```rust
/// use recordwise::curry::{CurryError, curry};
///
/// let add = curry(2, |arguments: &[i32]| arguments.iter().sum::<i32>());
/// let complete = add.call([1, 2]);
///
/// assert_eq!(complete.call([3]).unwrap_err(), CurryError::Saturated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurryError {
    /// The chain already reached its arity and produced a result, so there is
    /// no function left to call.
    Saturated,
}

impl std::fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saturated => write!(
                formatter,
                "curried function already applied: the result is not callable"
            ),
        }
    }
}

impl std::error::Error for CurryError {}
