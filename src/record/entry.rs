//! Entry views produced while walking a record.
//!
//! [`Entries`] is the single walk every iteration helper is built on: it yields
//! one [`Entry`] per key, in enumeration order, carrying the value, the key,
//! the zero-based position and the record being walked.

use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::slice;
use std::sync::Arc;

use super::{Key, Record};

/// A single `(value, key, index, record)` view of a record.
///
/// Entries borrow from the record; they never own or modify anything.
///
/// # Examples
///
/// ```rust
/// use recordwise::record;
///
/// let record = record! { "foo" => 1, "bar" => 2 };
/// let second = record.entries().nth(1).unwrap();
///
/// assert_eq!(second.key(), "bar");
/// assert_eq!(*second.value(), 2);
/// assert_eq!(second.index(), 1);
/// ```
pub struct Entry<'a, V> {
    value: &'a V,
    key: &'a Key,
    index: usize,
    record: &'a Record<V>,
}

impl<'a, V> Entry<'a, V> {
    /// Returns the value of this entry.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &'a V {
        self.value
    }

    /// Returns the key of this entry.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Returns the key as a shared handle, for building derived records
    /// without copying the key.
    #[inline]
    #[must_use]
    pub fn shared_key(&self) -> Key {
        Arc::clone(self.key)
    }

    /// Returns the zero-based position of this entry in the walk.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the record being walked.
    #[inline]
    #[must_use]
    pub const fn record(&self) -> &'a Record<V> {
        self.record
    }
}

impl<V> Clone for Entry<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Entry<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Entry<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Entry")
            .field("key", &self.key())
            .field("index", &self.index)
            .field("value", self.value)
            .finish()
    }
}

/// Iterator over the entries of a record, in enumeration order.
///
/// Created by [`Record::entries`].
pub struct Entries<'a, V> {
    record: &'a Record<V>,
    slots: Enumerate<slice::Iter<'a, (Key, V)>>,
}

impl<'a, V> Entries<'a, V> {
    pub(super) fn new(record: &'a Record<V>, slots: &'a [(Key, V)]) -> Self {
        Self {
            record,
            slots: slots.iter().enumerate(),
        }
    }
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = Entry<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.record;
        self.slots.next().map(|(index, (key, value))| Entry {
            value,
            key,
            index,
            record,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<V> ExactSizeIterator for Entries<'_, V> {}

impl<V> FusedIterator for Entries<'_, V> {}
