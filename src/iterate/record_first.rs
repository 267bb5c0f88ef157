//! Record-first entry point.
//!
//! [`record_first`] fixes the record and leaves the callback open, the mirror
//! image of [`callback_first`](super::callback_first):
//!
//! ```text
//! record_first(&record).map(transform) == map(&record, transform)
//! ```

use super::EmptyInputError;
use crate::record::Record;

/// A record waiting for a callback.
///
/// Created by [`record_first`]. Every method runs the corresponding helper of
/// [`iterate`](super) over the fixed record; the view itself can be applied
/// any number of times.
///
/// # Examples
///
/// ```rust
/// use recordwise::iterate::record_first;
/// use recordwise::record;
///
/// let record = record! { "foo" => "bar", "doge" => "wow" };
/// let pending = record_first(&record);
///
/// let shouted = pending.map(|value, _, _| value.to_uppercase());
/// let kept = pending.filter(|_, key, _| key != "doge");
///
/// assert_eq!(shouted["doge"], "WOW");
/// assert_eq!(kept, record! { "foo" => "bar" });
/// ```
pub struct RecordFirst<'a, V> {
    record: &'a Record<V>,
}

/// Fixes `record` as the first argument of every iteration helper.
pub const fn record_first<V>(record: &Record<V>) -> RecordFirst<'_, V> {
    RecordFirst { record }
}

impl<'a, V> RecordFirst<'a, V> {
    /// Returns the fixed record.
    #[inline]
    pub const fn record(&self) -> &'a Record<V> {
        self.record
    }

    /// See [`map`](super::map).
    pub fn map<U, F>(&self, transform: F) -> Record<U>
    where
        F: FnMut(&V, &str, &Record<V>) -> U,
    {
        super::map(self.record, transform)
    }

    /// See [`map_indexed`](super::map_indexed).
    pub fn map_indexed<U, F>(&self, transform: F) -> Record<U>
    where
        F: FnMut(&V, &str, usize, &Record<V>) -> U,
    {
        super::map_indexed(self.record, transform)
    }

    /// See [`for_each`](super::for_each).
    pub fn for_each<F>(&self, iterate: F)
    where
        F: FnMut(&V, &str, &Record<V>),
    {
        super::for_each(self.record, iterate);
    }

    /// See [`for_each_indexed`](super::for_each_indexed).
    pub fn for_each_indexed<F>(&self, iterate: F)
    where
        F: FnMut(&V, &str, usize, &Record<V>),
    {
        super::for_each_indexed(self.record, iterate);
    }

    /// See [`reduce`](super::reduce).
    pub fn reduce<A, F>(&self, reducer: F, initial: A) -> A
    where
        F: FnMut(A, &V, &str, &Record<V>) -> A,
    {
        super::reduce(self.record, reducer, initial)
    }

    /// See [`reduce_indexed`](super::reduce_indexed).
    pub fn reduce_indexed<A, F>(&self, reducer: F, initial: A) -> A
    where
        F: FnMut(A, &V, &str, usize, &Record<V>) -> A,
    {
        super::reduce_indexed(self.record, reducer, initial)
    }
}

impl<V: Clone> RecordFirst<'_, V> {
    /// See [`filter`](super::filter).
    pub fn filter<F>(&self, predicate: F) -> Record<V>
    where
        F: FnMut(&V, &str, &Record<V>) -> bool,
    {
        super::filter(self.record, predicate)
    }

    /// See [`filter_indexed`](super::filter_indexed).
    pub fn filter_indexed<F>(&self, predicate: F) -> Record<V>
    where
        F: FnMut(&V, &str, usize, &Record<V>) -> bool,
    {
        super::filter_indexed(self.record, predicate)
    }

    /// See [`reduce_first`](super::reduce_first).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] if the record has no entries.
    pub fn reduce_first<F>(&self, reducer: F) -> Result<V, EmptyInputError>
    where
        F: FnMut(V, &V, &str, &Record<V>) -> V,
    {
        super::reduce_first(self.record, reducer)
    }

    /// See [`reduce_first_indexed`](super::reduce_first_indexed).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] if the record has no entries.
    pub fn reduce_first_indexed<F>(&self, reducer: F) -> Result<V, EmptyInputError>
    where
        F: FnMut(V, &V, &str, usize, &Record<V>) -> V,
    {
        super::reduce_first_indexed(self.record, reducer)
    }
}

impl<V> Clone for RecordFirst<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for RecordFirst<'_, V> {}
