//! Insertion-ordered, immutable key-value records.
//!
//! This module provides [`Record`], the container every iteration helper in
//! this crate walks over. A record maps string keys to values and enumerates
//! its keys in insertion order.
//!
//! # Immutability
//!
//! All operations that would change a record return a new record and leave
//! the original untouched:
//!
//! ```rust
//! use recordwise::record::Record;
//!
//! let record = Record::new().insert("foo", "bar");
//! let updated = record.insert("doge", "wow");
//!
//! assert_eq!(record.len(), 1);  // Original unchanged
//! assert_eq!(updated.len(), 2); // New version
//! ```
//!
//! # Key Order
//!
//! Keys are enumerated in the order they were first inserted. Inserting an
//! existing key replaces its value and keeps its position:
//!
//! ```rust
//! use recordwise::record;
//!
//! let record = record! { "a" => 1, "b" => 2 }.insert("a", 10);
//! let keys: Vec<&str> = record.keys().collect();
//!
//! assert_eq!(keys, vec!["a", "b"]);
//! assert_eq!(record["a"], 10);
//! ```
//!
//! # Equality
//!
//! Two records are equal when they hold the same keys with equal values,
//! regardless of enumeration order.

mod entry;
mod hasher;

pub use entry::{Entries, Entry};

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use hasher::KeyHasher;

/// Shared record key.
///
/// Derived records reuse the keys of their source instead of copying them.
pub type Key = Arc<str>;

/// An insertion-ordered mapping from string keys to values.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `get`         | O(1)       |
/// | `insert`      | O(n)       |
/// | `len`         | O(1)       |
/// | `entries`     | O(1) + O(n)|
///
/// `insert` is O(n) because it returns a new record.
///
/// # Examples
///
/// ```rust
/// use recordwise::record;
///
/// let record = record! { "foo" => "bar", "doge" => "wow" };
///
/// assert_eq!(record.get("foo"), Some(&"bar"));
/// assert_eq!(record.get("missing"), None);
/// assert_eq!(format!("{record}"), "{foo: bar, doge: wow}");
/// ```
#[derive(Clone)]
pub struct Record<V> {
    slots: Vec<(Key, V)>,
    positions: HashMap<Key, usize, KeyHasher>,
}

impl<V> Record<V> {
    /// Creates an empty record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordwise::record::Record;
    ///
    /// let record: Record<i32> = Record::new();
    /// assert!(record.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, KeyHasher::default()),
        }
    }

    /// Creates a record holding a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordwise::record::Record;
    ///
    /// let record = Record::singleton("answer", 42);
    /// assert_eq!(record.len(), 1);
    /// assert_eq!(record["answer"], 42);
    /// ```
    #[must_use]
    pub fn singleton(key: impl Into<Key>, value: V) -> Self {
        let mut record = Self::with_capacity(1);
        record.put(key.into(), value);
        record
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the record has no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value stored under `key`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.positions
            .get(key)
            .and_then(|&position| self.slots.get(position))
            .map(|(_, value)| value)
    }

    /// Returns `true` if the record holds `key`.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the keys in enumeration order.
    #[must_use]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.slots.iter().map(|(key, _)| key.as_ref())
    }

    /// Returns the values in enumeration order.
    #[must_use]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.slots.iter().map(|(_, value)| value)
    }

    /// Returns `(key, value)` pairs in enumeration order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// Returns the entries in enumeration order.
    ///
    /// Each [`Entry`] carries the value, the key, its zero-based index and a
    /// reference back to this record.
    #[must_use]
    pub fn entries(&self) -> Entries<'_, V> {
        Entries::new(self, &self.slots)
    }

    /// Writes `value` under `key` in place.
    ///
    /// Existing keys keep their position; new keys are appended.
    pub(crate) fn put(&mut self, key: Key, value: V) {
        if let Some(&position) = self.positions.get(&key) {
            self.slots[position].1 = value;
        } else {
            self.positions.insert(Arc::clone(&key), self.slots.len());
            self.slots.push((key, value));
        }
    }
}

impl<V: Clone> Record<V> {
    /// Returns a new record with `value` stored under `key`.
    ///
    /// If the key already exists its value is replaced and its position in the
    /// enumeration order is kept. The original record is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordwise::record::Record;
    ///
    /// let original = Record::new().insert("foo", 1);
    /// let replaced = original.insert("foo", 2);
    ///
    /// assert_eq!(original["foo"], 1);
    /// assert_eq!(replaced["foo"], 2);
    /// assert_eq!(replaced.len(), 1);
    /// ```
    #[must_use]
    pub fn insert(&self, key: impl Into<Key>, value: V) -> Self {
        let mut record = self.clone();
        record.put(key.into(), value);
        record
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<&str> for Record<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the record.
    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key {key:?} not found in record"),
        }
    }
}

impl<V: PartialEq> PartialEq for Record<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|other_value| value == other_value))
    }
}

impl<V: Eq> Eq for Record<V> {}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<V: fmt::Display> fmt::Display for Record<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Iterator over `(key, value)` pairs of a record.
///
/// Created by [`Record::iter`].
pub struct Iter<'a, V> {
    slots: std::slice::Iter<'a, (Key, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|(key, value)| (key.as_ref(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (Key, V);
    type IntoIter = std::vec::IntoIter<(Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut record = Self::with_capacity(iter.size_hint().0);
        record.extend(iter);
        record
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key.into(), value);
        }
    }
}

/// Creates a [`Record`] from `key => value` pairs, in the order given.
///
/// # Examples
///
/// ```rust
/// use recordwise::record;
///
/// let record = record! { "foo" => "bar", "doge" => "wow" };
/// let keys: Vec<&str> = record.keys().collect();
/// assert_eq!(keys, vec!["foo", "doge"]);
///
/// let empty: recordwise::record::Record<i32> = record! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::record::Record<_> as ::core::iter::FromIterator<_>>::from_iter([
            $(($key, $value)),+
        ])
    };
}

static_assertions::assert_impl_all!(Record<String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Record<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct RecordVisitor<V> {
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::de::Visitor<'de> for RecordVisitor<V> {
    type Value = Record<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut record = Record::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            record.put(Key::from(key), value);
        }
        Ok(record)
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for Record<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor {
            value_marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_record_is_empty() {
        let record: Record<i32> = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert_eq!(record.keys().count(), 0);
    }

    #[rstest]
    fn test_put_existing_key_keeps_position() {
        let mut record = Record::new();
        record.put(Key::from("a"), 1);
        record.put(Key::from("b"), 2);
        record.put(Key::from("a"), 3);

        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.values().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[rstest]
    fn test_insert_leaves_original_untouched() {
        let original = Record::singleton("a", 1);
        let extended = original.insert("b", 2);

        assert_eq!(original.len(), 1);
        assert!(!original.contains_key("b"));
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.get("b"), Some(&2));
    }

    #[rstest]
    fn test_from_iterator_collapses_duplicate_keys() {
        let record: Record<i32> = vec![("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record["x"], 3);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[rstest]
    fn test_equality_ignores_order() {
        let forward = record! { "a" => 1, "b" => 2 };
        let backward = record! { "b" => 2, "a" => 1 };
        assert_eq!(forward, backward);
    }

    #[rstest]
    #[case(record! { "a" => 1 }, record! { "a" => 2 })]
    #[case(record! { "a" => 1 }, record! { "b" => 1 })]
    #[case(record! { "a" => 1 }, record! { "a" => 1, "b" => 2 })]
    fn test_inequality(#[case] left: Record<i32>, #[case] right: Record<i32>) {
        assert_ne!(left, right);
    }

    #[rstest]
    fn test_display_empty_record() {
        let record: Record<i32> = Record::new();
        assert_eq!(format!("{record}"), "{}");
    }

    #[rstest]
    fn test_display_in_insertion_order() {
        let record = record! { "zeta" => 1, "alpha" => 2 };
        assert_eq!(format!("{record}"), "{zeta: 1, alpha: 2}");
    }

    #[rstest]
    fn test_debug_renders_as_map() {
        let record = record! { "foo" => "bar" };
        assert_eq!(format!("{record:?}"), r#"{"foo": "bar"}"#);
    }

    #[rstest]
    #[should_panic(expected = "not found in record")]
    fn test_index_missing_key_panics() {
        let record = record! { "foo" => 1 };
        let _ = record["bar"];
    }

    #[rstest]
    fn test_owned_iteration_yields_shared_keys() {
        let record = record! { "foo" => 1, "bar" => 2 };
        let pairs: Vec<(Key, i32)> = record.into_iter().collect();
        assert_eq!(pairs[0].0.as_ref(), "foo");
        assert_eq!(pairs[1], (Key::from("bar"), 2));
    }
}
