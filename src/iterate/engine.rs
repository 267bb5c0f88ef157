//! The iteration engine behind every helper variant.
//!
//! Each loop here is written once, over [`Entry`] values and fallible
//! callbacks. Plain, indexed, curried and record-first variants are adapters
//! that project an entry onto their callback shape; infallible variants run
//! the same loops with [`Infallible`] as the error type.

use std::convert::Infallible;

use crate::record::{Entry, Record};

#[inline]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

pub fn try_map_entries<V, U, E, F>(
    record: &Record<V>,
    mut transform: F,
) -> Result<Record<U>, E>
where
    F: FnMut(Entry<'_, V>) -> Result<U, E>,
{
    let mut mapped = Record::with_capacity(record.len());
    for entry in record.entries() {
        mapped.put(entry.shared_key(), transform(entry)?);
    }
    Ok(mapped)
}

pub fn map_entries<V, U, F>(record: &Record<V>, mut transform: F) -> Record<U>
where
    F: FnMut(Entry<'_, V>) -> U,
{
    infallible(try_map_entries(record, |entry| Ok(transform(entry))))
}

pub fn try_filter_entries<V, E, F>(
    record: &Record<V>,
    mut predicate: F,
) -> Result<Record<V>, E>
where
    V: Clone,
    F: FnMut(Entry<'_, V>) -> Result<bool, E>,
{
    let mut retained = Record::new();
    for entry in record.entries() {
        if predicate(entry)? {
            retained.put(entry.shared_key(), entry.value().clone());
        }
    }
    Ok(retained)
}

pub fn filter_entries<V, F>(record: &Record<V>, mut predicate: F) -> Record<V>
where
    V: Clone,
    F: FnMut(Entry<'_, V>) -> bool,
{
    infallible(try_filter_entries(record, |entry| Ok(predicate(entry))))
}

pub fn try_fold_entries<'a, V, A, E, I, F>(
    entries: I,
    initial: A,
    mut reducer: F,
) -> Result<A, E>
where
    V: 'a,
    I: Iterator<Item = Entry<'a, V>>,
    F: FnMut(A, Entry<'a, V>) -> Result<A, E>,
{
    let mut accumulator = initial;
    for entry in entries {
        accumulator = reducer(accumulator, entry)?;
    }
    Ok(accumulator)
}

pub fn fold_entries<'a, V, A, I, F>(entries: I, initial: A, mut reducer: F) -> A
where
    V: 'a,
    I: Iterator<Item = Entry<'a, V>>,
    F: FnMut(A, Entry<'a, V>) -> A,
{
    infallible(try_fold_entries(entries, initial, |accumulator, entry| {
        Ok(reducer(accumulator, entry))
    }))
}

pub fn try_for_each_entry<V, E, F>(record: &Record<V>, mut iterate: F) -> Result<(), E>
where
    F: FnMut(Entry<'_, V>) -> Result<(), E>,
{
    try_fold_entries(record.entries(), (), |(), entry| iterate(entry))
}

pub fn for_each_entry<V, F>(record: &Record<V>, mut iterate: F)
where
    F: FnMut(Entry<'_, V>),
{
    infallible(try_for_each_entry(record, |entry| {
        iterate(entry);
        Ok(())
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use rstest::rstest;

    #[rstest]
    fn test_try_map_entries_stops_at_first_error() {
        let record = record! { "a" => 1, "b" => 2, "c" => 3 };
        let mut visited = Vec::new();

        let result: Result<Record<i32>, String> = try_map_entries(&record, |entry| {
            visited.push(entry.key().to_string());
            if entry.key() == "b" {
                Err("stop".to_string())
            } else {
                Ok(*entry.value())
            }
        });

        assert_eq!(result, Err("stop".to_string()));
        assert_eq!(visited, vec!["a", "b"]);
    }

    #[rstest]
    fn test_fold_entries_runs_left_to_right() {
        let record = record! { "a" => 1, "b" => 2, "c" => 3 };
        let order = fold_entries(record.entries(), String::new(), |mut accumulator, entry| {
            accumulator.push_str(entry.key());
            accumulator
        });
        assert_eq!(order, "abc");
    }

    #[rstest]
    fn test_fold_entries_over_partial_walk() {
        let record = record! { "a" => 1, "b" => 2, "c" => 3 };
        let mut entries = record.entries();
        entries.next();
        let sum = fold_entries(entries, 0, |accumulator, entry| accumulator + entry.value());
        assert_eq!(sum, 5);
    }

    #[rstest]
    fn test_filter_entries_shares_keys_with_source() {
        let record = record! { "kept" => 1 };
        let filtered = filter_entries(&record, |_| true);
        let source_key = record.entries().next().unwrap().shared_key();
        let filtered_key = filtered.entries().next().unwrap().shared_key();
        assert!(std::sync::Arc::ptr_eq(&source_key, &filtered_key));
    }
}
