//! Error types for the iteration helpers.

/// Represents a reduce without an initial accumulator over an empty record.
///
/// [`reduce_first`](super::reduce_first) seeds its accumulator from the first
/// entry, so an empty record leaves it with nothing to return.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::{EmptyInputError, reduce_first};
/// use recordwise::record::Record;
///
/// let empty: Record<i32> = Record::new();
/// let result = reduce_first(&empty, |accumulator, value, _, _| accumulator + value);
///
/// assert_eq!(result, Err(EmptyInputError));
/// assert_eq!(
///     format!("{}", EmptyInputError),
///     "reduce of empty record with no initial value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyInputError;

impl std::fmt::Display for EmptyInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("reduce of empty record with no initial value")
    }
}

impl std::error::Error for EmptyInputError {}
