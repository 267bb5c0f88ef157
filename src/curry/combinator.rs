//! Argument-order combinators.

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g(b, a)` such that
/// `g(b, a) = f(a, b)`. This turns the record-first helpers of
/// the `iterate` module into callback-first ones without currying.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```rust
/// use recordwise::curry::flip;
///
/// fn prefix(text: &str, by: char) -> String {
///     format!("{by}{text}")
/// }
///
/// let flipped = flip(prefix);
/// assert_eq!(flipped('#', "tag"), prefix("tag", '#'));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
