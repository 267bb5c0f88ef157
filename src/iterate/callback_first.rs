//! Callback-first, curried entry points.
//!
//! Each function here takes the callback (and, for reducers, the initial
//! accumulator) and returns a closure waiting for the record:
//!
//! ```text
//! callback_first::map(transform)(&record) == map(&record, transform)
//! ```
//!
//! The returned closures can be stored, reused across records and passed
//! to combinators such as `Iterator::map`.
//!
//! # Examples
//!
//! ```rust
//! use recordwise::iterate::callback_first;
//! use recordwise::record;
//!
//! let shout = callback_first::map(|value: &&str, _: &str, _| value.to_uppercase());
//!
//! let first = record! { "foo" => "bar" };
//! let second = record! { "doge" => "wow" };
//!
//! assert_eq!(shout(&first)["foo"], "BAR");
//! assert_eq!(shout(&second)["doge"], "WOW");
//! ```

use super::EmptyInputError;
use crate::record::Record;

/// Curried [`map`](super::map).
pub fn map<V, U, F>(transform: F) -> impl Fn(&Record<V>) -> Record<U>
where
    F: Fn(&V, &str, &Record<V>) -> U,
{
    move |record: &Record<V>| super::map(record, &transform)
}

/// Curried [`map_indexed`](super::map_indexed).
pub fn map_indexed<V, U, F>(transform: F) -> impl Fn(&Record<V>) -> Record<U>
where
    F: Fn(&V, &str, usize, &Record<V>) -> U,
{
    move |record: &Record<V>| super::map_indexed(record, &transform)
}

/// Curried [`filter`](super::filter).
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::callback_first;
/// use recordwise::record;
///
/// let without_doge = callback_first::filter(|_: &&str, key: &str, _| key != "doge");
/// let record = record! { "foo" => "bar", "doge" => "wow" };
///
/// assert_eq!(without_doge(&record), record! { "foo" => "bar" });
/// ```
pub fn filter<V, F>(predicate: F) -> impl Fn(&Record<V>) -> Record<V>
where
    V: Clone,
    F: Fn(&V, &str, &Record<V>) -> bool,
{
    move |record: &Record<V>| super::filter(record, &predicate)
}

/// Curried [`filter_indexed`](super::filter_indexed).
pub fn filter_indexed<V, F>(predicate: F) -> impl Fn(&Record<V>) -> Record<V>
where
    V: Clone,
    F: Fn(&V, &str, usize, &Record<V>) -> bool,
{
    move |record: &Record<V>| super::filter_indexed(record, &predicate)
}

/// Curried [`for_each`](super::for_each).
///
/// The returned closure is `FnMut` so `iterate` may keep state between
/// records.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::callback_first;
/// use recordwise::record;
///
/// let mut keys = Vec::new();
/// {
///     let mut collect = callback_first::for_each(|_: &i32, key: &str, _| keys.push(key.to_string()));
///     collect(&record! { "a" => 1 });
///     collect(&record! { "b" => 2 });
/// }
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
pub fn for_each<V, F>(mut iterate: F) -> impl FnMut(&Record<V>)
where
    F: FnMut(&V, &str, &Record<V>),
{
    move |record: &Record<V>| super::for_each(record, &mut iterate)
}

/// Curried [`for_each_indexed`](super::for_each_indexed).
pub fn for_each_indexed<V, F>(mut iterate: F) -> impl FnMut(&Record<V>)
where
    F: FnMut(&V, &str, usize, &Record<V>),
{
    move |record: &Record<V>| super::for_each_indexed(record, &mut iterate)
}

/// Curried [`reduce`](super::reduce).
///
/// `initial` is cloned for every record the closure is applied to.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::callback_first;
/// use recordwise::record;
///
/// let collect_values = callback_first::reduce(
///     |mut values: Vec<String>, value: &String, _: &str, _| {
///         values.push(value.clone());
///         values
///     },
///     Vec::new(),
/// );
/// let record = record! { "foo" => "bar".to_string(), "doge" => "wow".to_string() };
///
/// assert_eq!(collect_values(&record), vec!["bar", "wow"]);
/// ```
pub fn reduce<V, A, F>(reducer: F, initial: A) -> impl Fn(&Record<V>) -> A
where
    A: Clone,
    F: Fn(A, &V, &str, &Record<V>) -> A,
{
    move |record: &Record<V>| super::reduce(record, &reducer, initial.clone())
}

/// Curried [`reduce_indexed`](super::reduce_indexed).
pub fn reduce_indexed<V, A, F>(reducer: F, initial: A) -> impl Fn(&Record<V>) -> A
where
    A: Clone,
    F: Fn(A, &V, &str, usize, &Record<V>) -> A,
{
    move |record: &Record<V>| super::reduce_indexed(record, &reducer, initial.clone())
}

/// Curried [`reduce_first`](super::reduce_first).
pub fn reduce_first<V, F>(reducer: F) -> impl Fn(&Record<V>) -> Result<V, EmptyInputError>
where
    V: Clone,
    F: Fn(V, &V, &str, &Record<V>) -> V,
{
    move |record: &Record<V>| super::reduce_first(record, &reducer)
}

/// Curried [`reduce_first_indexed`](super::reduce_first_indexed).
pub fn reduce_first_indexed<V, F>(reducer: F) -> impl Fn(&Record<V>) -> Result<V, EmptyInputError>
where
    V: Clone,
    F: Fn(V, &V, &str, usize, &Record<V>) -> V,
{
    move |record: &Record<V>| super::reduce_first_indexed(record, &reducer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use rstest::rstest;

    #[rstest]
    fn test_curried_map_is_reusable() {
        let double = map(|value: &i32, _: &str, _: &Record<i32>| value * 2);
        assert_eq!(double(&record! { "a" => 1 }), record! { "a" => 2 });
        assert_eq!(double(&record! { "b" => 5 }), record! { "b" => 10 });
    }

    #[rstest]
    fn test_curried_reduce_clones_initial_per_record() {
        let count = reduce(|count: usize, _: &i32, _: &str, _: &Record<i32>| count + 1, 0);
        assert_eq!(count(&record! { "a" => 1, "b" => 2 }), 2);
        assert_eq!(count(&record! { "c" => 3 }), 1);
    }

    #[rstest]
    fn test_curried_reduce_first_on_empty_record() {
        let sum = reduce_first(|sum: i32, value: &i32, _: &str, _: &Record<i32>| sum + value);
        assert_eq!(sum(&Record::new()), Err(EmptyInputError));
    }

    #[rstest]
    fn test_curried_reduce_first_indexed_sees_positions_from_one() {
        let positions = reduce_first_indexed(
            |mut joined: String, value: &String, _: &str, index: usize, _: &Record<String>| {
                joined.push_str(&format!("{index}{value}"));
                joined
            },
        );
        let record = record! { "a" => "x".to_string(), "b" => "y".to_string(), "c" => "z".to_string() };
        assert_eq!(positions(&record), Ok("x1y2z".to_string()));
        assert_eq!(positions(&Record::new()), Err(EmptyInputError));
    }
}
