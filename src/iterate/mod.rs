//! Functional iteration helpers over records.
//!
//! This module provides `map`, `filter`, `for_each` and `reduce` over the
//! entries of a [`Record`], always producing a new record (or an accumulated
//! value) and never modifying the input.
//!
//! # Variants
//!
//! Every helper comes in several shapes, all running the same loop:
//!
//! | Shape                 | Example                                      |
//! |-----------------------|----------------------------------------------|
//! | Direct                | `map(&record, transform)`                    |
//! | Indexed               | `map_indexed(&record, transform)`            |
//! | Callback first        | `callback_first::map(transform)(&record)`    |
//! | Record first          | `record_first(&record).map(transform)`       |
//! | Fallible              | `try_map(&record, transform)`                |
//!
//! Plain callbacks receive `(value, key, record)`; indexed callbacks receive
//! `(value, key, index, record)` where `index` counts entries from zero.
//! Reducers receive the accumulator first.
//!
//! # Examples
//!
//! ```rust
//! use recordwise::iterate::{filter, map, reduce};
//! use recordwise::record;
//!
//! let record = record! { "foo" => "bar", "doge" => "wow" };
//!
//! let shouted = map(&record, |value, _, _| value.to_uppercase());
//! assert_eq!(shouted, record! { "foo" => "BAR".to_string(), "doge" => "WOW".to_string() });
//!
//! let without_doge = filter(&record, |_, key, _| key != "doge");
//! assert_eq!(without_doge, record! { "foo" => "bar" });
//!
//! let values = reduce(&record, |mut accumulator: Vec<&str>, value, _, _| {
//!     accumulator.push(*value);
//!     accumulator
//! }, Vec::new());
//! assert_eq!(values, vec!["bar", "wow"]);
//! ```
//!
//! # Reduce Without an Initial Accumulator
//!
//! [`reduce_first`] seeds the accumulator with the first entry's value and
//! folds the remaining entries. An empty record yields [`EmptyInputError`].
//!
//! ```rust
//! use recordwise::iterate::{EmptyInputError, reduce_first};
//! use recordwise::record;
//! use recordwise::record::Record;
//!
//! let record = record! { "a" => 1, "b" => 2, "c" => 3 };
//! assert_eq!(reduce_first(&record, |sum, value, _, _| sum + value), Ok(6));
//!
//! let empty: Record<i32> = Record::new();
//! assert_eq!(reduce_first(&empty, |sum, value, _, _| sum + value), Err(EmptyInputError));
//! ```
//!
//! # Flipping Argument Order
//!
//! The direct helpers take the record first. `flip` from the `curry` module
//! (behind the `curry` feature) turns any of them into a callback-first
//! function of two arguments:
//!
//! ```rust
//! # #[cfg(feature = "curry")]
//! # {
//! use recordwise::curry::flip;
//! use recordwise::iterate::map;
//! use recordwise::record;
//! use recordwise::record::Record;
//!
//! let record = record! { "foo" => 1, "bar" => 2 };
//! let double = |value: &i32, _: &str, _: &Record<i32>| value * 2;
//!
//! let map_callback_first = flip(map);
//! assert_eq!(map_callback_first(double, &record), map(&record, double));
//! # }
//! ```
//!
//! # Failure
//!
//! A panicking callback unwinds out of the helper immediately; nothing is
//! returned. Callbacks that can fail should use the `try_*` variants, which
//! stop at the first `Err` and return it.

pub mod callback_first;
mod engine;
mod error;
mod record_first;

pub use error::EmptyInputError;
pub use record_first::{RecordFirst, record_first};

use crate::record::Record;

// =============================================================================
// map
// =============================================================================

/// Returns a new record with the same keys, each value replaced by
/// `transform(value, key, record)`.
///
/// The output preserves the enumeration order of the input.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::map;
/// use recordwise::record;
///
/// let record = record! { "a" => 1, "b" => 2 };
/// let labelled = map(&record, |value, key, _| format!("{key}={value}"));
///
/// assert_eq!(labelled["a"], "a=1");
/// assert_eq!(labelled["b"], "b=2");
/// ```
pub fn map<V, U, F>(record: &Record<V>, mut transform: F) -> Record<U>
where
    F: FnMut(&V, &str, &Record<V>) -> U,
{
    engine::map_entries(record, |entry| {
        transform(entry.value(), entry.key(), entry.record())
    })
}

/// Like [`map`], with the zero-based entry index passed to `transform`.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::map_indexed;
/// use recordwise::record;
///
/// let record = record! { "first" => 'x', "second" => 'y' };
/// let positions = map_indexed(&record, |_, _, index, _| index);
///
/// assert_eq!(positions, record! { "first" => 0, "second" => 1 });
/// ```
pub fn map_indexed<V, U, F>(record: &Record<V>, mut transform: F) -> Record<U>
where
    F: FnMut(&V, &str, usize, &Record<V>) -> U,
{
    engine::map_entries(record, |entry| {
        transform(entry.value(), entry.key(), entry.index(), entry.record())
    })
}

/// Like [`map`], with a fallible `transform`.
///
/// Stops at the first `Err` and returns it.
///
/// # Errors
///
/// Returns the first error produced by `transform`.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::try_map;
/// use recordwise::record;
///
/// let record = record! { "a" => "1", "b" => "two" };
/// let parsed = try_map(&record, |value, _, _| value.parse::<i32>());
///
/// assert!(parsed.is_err());
/// ```
pub fn try_map<V, U, E, F>(record: &Record<V>, mut transform: F) -> Result<Record<U>, E>
where
    F: FnMut(&V, &str, &Record<V>) -> Result<U, E>,
{
    engine::try_map_entries(record, |entry| {
        transform(entry.value(), entry.key(), entry.record())
    })
}

// =============================================================================
// filter
// =============================================================================

/// Returns a new record holding only the entries for which
/// `predicate(value, key, record)` returns `true`.
///
/// Retained entries keep their original order and values.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::filter;
/// use recordwise::record;
///
/// let record = record! { "a" => 1, "b" => 2, "c" => 3 };
/// let odd = filter(&record, |value, _, _| value % 2 == 1);
///
/// assert_eq!(odd, record! { "a" => 1, "c" => 3 });
/// ```
pub fn filter<V, F>(record: &Record<V>, mut predicate: F) -> Record<V>
where
    V: Clone,
    F: FnMut(&V, &str, &Record<V>) -> bool,
{
    engine::filter_entries(record, |entry| {
        predicate(entry.value(), entry.key(), entry.record())
    })
}

/// Like [`filter`], with the zero-based entry index passed to `predicate`.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::filter_indexed;
/// use recordwise::record;
///
/// let record = record! { "a" => 1, "b" => 2, "c" => 3 };
/// let head = filter_indexed(&record, |_, _, index, _| index == 0);
///
/// assert_eq!(head, record! { "a" => 1 });
/// ```
pub fn filter_indexed<V, F>(record: &Record<V>, mut predicate: F) -> Record<V>
where
    V: Clone,
    F: FnMut(&V, &str, usize, &Record<V>) -> bool,
{
    engine::filter_entries(record, |entry| {
        predicate(entry.value(), entry.key(), entry.index(), entry.record())
    })
}

/// Like [`filter`], with a fallible `predicate`.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_filter<V, E, F>(record: &Record<V>, mut predicate: F) -> Result<Record<V>, E>
where
    V: Clone,
    F: FnMut(&V, &str, &Record<V>) -> Result<bool, E>,
{
    engine::try_filter_entries(record, |entry| {
        predicate(entry.value(), entry.key(), entry.record())
    })
}

// =============================================================================
// for_each
// =============================================================================

/// Calls `iterate(value, key, record)` once per entry, in enumeration order.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::for_each;
/// use recordwise::record;
///
/// let record = record! { "foo" => "bar", "doge" => "wow" };
/// let mut seen = Vec::new();
/// for_each(&record, |value, key, _| seen.push(format!("{key}:{value}")));
///
/// assert_eq!(seen, vec!["foo:bar", "doge:wow"]);
/// ```
pub fn for_each<V, F>(record: &Record<V>, mut iterate: F)
where
    F: FnMut(&V, &str, &Record<V>),
{
    engine::for_each_entry(record, |entry| {
        iterate(entry.value(), entry.key(), entry.record());
    });
}

/// Like [`for_each`], with the zero-based entry index passed to `iterate`.
pub fn for_each_indexed<V, F>(record: &Record<V>, mut iterate: F)
where
    F: FnMut(&V, &str, usize, &Record<V>),
{
    engine::for_each_entry(record, |entry| {
        iterate(entry.value(), entry.key(), entry.index(), entry.record());
    });
}

/// Like [`for_each`], with a fallible `iterate`.
///
/// Entries after the first failure are not visited.
///
/// # Errors
///
/// Returns the first error produced by `iterate`.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::try_for_each;
/// use recordwise::record;
///
/// let record = record! { "a" => 1, "b" => -1, "c" => 2 };
/// let mut visited = Vec::new();
/// let result = try_for_each(&record, |value, key, _| {
///     visited.push(key.to_string());
///     if *value < 0 { Err(format!("{key} is negative")) } else { Ok(()) }
/// });
///
/// assert_eq!(result, Err("b is negative".to_string()));
/// assert_eq!(visited, vec!["a", "b"]);
/// ```
pub fn try_for_each<V, E, F>(record: &Record<V>, mut iterate: F) -> Result<(), E>
where
    F: FnMut(&V, &str, &Record<V>) -> Result<(), E>,
{
    engine::try_for_each_entry(record, |entry| {
        iterate(entry.value(), entry.key(), entry.record())
    })
}

// =============================================================================
// reduce
// =============================================================================

/// Folds every entry into `initial`, left to right, via
/// `reducer(accumulator, value, key, record)`.
///
/// An empty record returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::reduce;
/// use recordwise::record;
///
/// let record = record! { "a" => 1, "b" => 2, "c" => 3 };
/// let sum = reduce(&record, |sum, value, _, _| sum + value, 0);
///
/// assert_eq!(sum, 6);
/// ```
pub fn reduce<V, A, F>(record: &Record<V>, mut reducer: F, initial: A) -> A
where
    F: FnMut(A, &V, &str, &Record<V>) -> A,
{
    engine::fold_entries(record.entries(), initial, |accumulator, entry| {
        reducer(accumulator, entry.value(), entry.key(), entry.record())
    })
}

/// Like [`reduce`], with the zero-based entry index passed to `reducer`.
pub fn reduce_indexed<V, A, F>(record: &Record<V>, mut reducer: F, initial: A) -> A
where
    F: FnMut(A, &V, &str, usize, &Record<V>) -> A,
{
    engine::fold_entries(record.entries(), initial, |accumulator, entry| {
        reducer(
            accumulator,
            entry.value(),
            entry.key(),
            entry.index(),
            entry.record(),
        )
    })
}

/// Like [`reduce`], with a fallible `reducer`.
///
/// # Errors
///
/// Returns the first error produced by `reducer`.
pub fn try_reduce<V, A, E, F>(record: &Record<V>, mut reducer: F, initial: A) -> Result<A, E>
where
    F: FnMut(A, &V, &str, &Record<V>) -> Result<A, E>,
{
    engine::try_fold_entries(record.entries(), initial, |accumulator, entry| {
        reducer(accumulator, entry.value(), entry.key(), entry.record())
    })
}

/// Reduces without an initial accumulator.
///
/// The first entry's value seeds the accumulator and folding starts from the
/// second entry.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if the record has no entries.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::reduce_first;
/// use recordwise::record;
///
/// let record = record! { "a" => 3, "b" => 9, "c" => 4 };
/// let largest = reduce_first(&record, |max: i32, value, _, _| max.max(*value));
///
/// assert_eq!(largest, Ok(9));
/// ```
pub fn reduce_first<V, F>(record: &Record<V>, mut reducer: F) -> Result<V, EmptyInputError>
where
    V: Clone,
    F: FnMut(V, &V, &str, &Record<V>) -> V,
{
    let mut entries = record.entries();
    let Some(first) = entries.next() else {
        #[cfg(feature = "tracing")]
        tracing::trace!("reduce_first over an empty record");
        return Err(EmptyInputError);
    };
    Ok(engine::fold_entries(
        entries,
        first.value().clone(),
        |accumulator, entry| reducer(accumulator, entry.value(), entry.key(), entry.record()),
    ))
}

/// Like [`reduce_first`], with the zero-based entry index passed to
/// `reducer`. The first call receives index `1`.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if the record has no entries.
pub fn reduce_first_indexed<V, F>(
    record: &Record<V>,
    mut reducer: F,
) -> Result<V, EmptyInputError>
where
    V: Clone,
    F: FnMut(V, &V, &str, usize, &Record<V>) -> V,
{
    let mut entries = record.entries();
    let Some(first) = entries.next() else {
        #[cfg(feature = "tracing")]
        tracing::trace!("reduce_first_indexed over an empty record");
        return Err(EmptyInputError);
    };
    Ok(engine::fold_entries(
        entries,
        first.value().clone(),
        |accumulator, entry| {
            reducer(
                accumulator,
                entry.value(),
                entry.key(),
                entry.index(),
                entry.record(),
            )
        },
    ))
}
