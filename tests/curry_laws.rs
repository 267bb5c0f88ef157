#![cfg(feature = "curry")]
//! Property-based tests for `curry` and `flip`.
//!
//! ## Curry Laws
//! - **Chunking**: any split of the arguments into calls gives the same result
//!   as supplying them all at once
//! - **Isolation**: continuing a partial application never changes it
//!
//! ## Flip Laws
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//! - **Double Flip Identity**: `flip(flip(f))(a, b) == f(a, b)`

use proptest::prelude::*;
use recordwise::curry::{Application, Curried, curry, flip};

fn weighted_sum(arguments: &[i64]) -> i64 {
    arguments
        .iter()
        .enumerate()
        .map(|(position, value)| (position as i64 + 1).wrapping_mul(*value))
        .fold(0, i64::wrapping_add)
}

fn apply_in_chunks(curried: &Curried<i64, i64>, arguments: &[i64], chunk: usize) -> Option<i64> {
    let mut current = curried.clone();
    for part in arguments.chunks(chunk) {
        match current.call(part.iter().copied()) {
            Application::Complete(result) => return Some(result),
            Application::Partial(next) => current = next,
        }
    }
    None
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_chunking_does_not_change_result(
        arguments in prop::collection::vec(-1000i64..1000, 1..8),
        chunk in 1usize..8,
    ) {
        let curried = curry(arguments.len(), weighted_sum);
        let expected = weighted_sum(&arguments);
        prop_assert_eq!(apply_in_chunks(&curried, &arguments, chunk), Some(expected));
    }

    #[test]
    fn prop_too_few_arguments_stay_partial(
        arguments in prop::collection::vec(any::<i64>(), 0..6),
        missing in 1usize..4,
    ) {
        let curried = curry(arguments.len() + missing, weighted_sum);
        let partial = curried.call(arguments.iter().copied()).partial();
        prop_assert!(partial.is_some());
        prop_assert_eq!(partial.map(|partial| partial.remaining()), Some(missing));
    }

    #[test]
    fn prop_partial_is_isolated(
        prefix in prop::collection::vec(-1000i64..1000, 1..4),
        left in -1000i64..1000,
        right in -1000i64..1000,
    ) {
        let curried = curry(prefix.len() + 1, weighted_sum);
        let partial = curried.call(prefix.iter().copied()).partial().unwrap();

        let with_left = partial.call_one(left).complete();
        let with_right = partial.call_one(right).complete();

        let mut expected_left = prefix.clone();
        expected_left.push(left);
        let mut expected_right = prefix.clone();
        expected_right.push(right);

        prop_assert_eq!(with_left, Some(weighted_sum(&expected_left)));
        prop_assert_eq!(with_right, Some(weighted_sum(&expected_right)));
        prop_assert_eq!(partial.applied(), prefix.as_slice());
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);
        prop_assert_eq!(flip(subtract)(a, b), subtract(b, a));
    }

    #[test]
    fn prop_double_flip_identity(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }
}
