//! Unit tests for `curry` and `flip`.

#![cfg(feature = "curry")]

use recordwise::curry::{Application, CurryError, Curried, curry, flip};
use rstest::rstest;

fn add_three(arguments: &[i32]) -> i32 {
    arguments.iter().take(3).sum()
}

fn curried_add_three() -> Curried<i32, i32> {
    curry(3, add_three)
}

// =============================================================================
// Accumulation
// =============================================================================

mod accumulation_tests {
    use super::*;

    #[rstest]
    fn test_all_arguments_at_once() {
        assert_eq!(curried_add_three().call([1, 2, 3]).complete(), Some(6));
    }

    #[rstest]
    fn test_one_then_two() {
        let result = curried_add_three().call([1]).call([2, 3]);
        assert_eq!(result.unwrap().complete(), Some(6));
    }

    #[rstest]
    fn test_two_then_one() {
        let result = curried_add_three().call([1, 2]).call([3]);
        assert_eq!(result.unwrap().complete(), Some(6));
    }

    #[rstest]
    fn test_one_at_a_time() {
        let result = curried_add_three()
            .call_one(1)
            .call([2])
            .and_then(|next| next.call([3]));
        assert_eq!(result.unwrap().complete(), Some(6));
    }

    #[rstest]
    #[case(vec![1, 2, 3])]
    #[case(vec![1, 2, 3, 100])]
    #[case(vec![1, 2, 3, 100, 200])]
    fn test_arguments_past_arity_are_passed_through(#[case] arguments: Vec<i32>) {
        let supplied = arguments.len();
        let count = curry(3, |received: &[i32]| received.len());
        assert_eq!(count.call(arguments).complete(), Some(supplied));
    }

    #[rstest]
    fn test_partial_until_arity() {
        let first = curried_add_three().call([1]);
        assert!(!first.is_complete());

        let second = first.call([2]).unwrap();
        assert!(!second.is_complete());

        let third = second.call([3]).unwrap();
        assert!(third.is_complete());
    }

    #[rstest]
    fn test_arity_is_fixed_at_wrap_time() {
        let curried = curried_add_three();
        let partial = curried.call([1, 2]).partial().unwrap();
        assert_eq!(curried.arity(), 3);
        assert_eq!(partial.arity(), 3);
        assert_eq!(partial.remaining(), 1);
    }
}

// =============================================================================
// Referential Isolation
// =============================================================================

mod isolation_tests {
    use super::*;

    #[rstest]
    fn test_same_partial_continued_two_ways() {
        let with_ten = curried_add_three().call([10]).partial().unwrap();

        let left = with_ten.call([1, 1]).complete();
        let right = with_ten.call([5, 5]).complete();

        assert_eq!(left, Some(12));
        assert_eq!(right, Some(20));
        assert_eq!(with_ten.applied(), [10]);
    }

    #[rstest]
    fn test_branches_do_not_share_arguments() {
        let root = curried_add_three();
        let branch_a = root.call([1]).partial().unwrap();
        let branch_b = root.call([100]).partial().unwrap();

        let deeper_a = branch_a.call([2]).partial().unwrap();

        assert_eq!(root.applied(), [] as [i32; 0]);
        assert_eq!(branch_a.applied(), [1]);
        assert_eq!(branch_b.applied(), [100]);
        assert_eq!(deeper_a.applied(), [1, 2]);
    }

    #[rstest]
    fn test_cloned_partial_is_independent() {
        let partial = curried_add_three().call([1]).partial().unwrap();
        let cloned = partial.clone();
        assert_eq!(cloned.call([2, 3]).complete(), Some(6));
        assert_eq!(partial.call([20, 30]).complete(), Some(51));
    }
}

// =============================================================================
// Errors
// =============================================================================

mod error_tests {
    use super::*;

    #[rstest]
    fn test_calling_complete_application_fails() {
        let complete = curried_add_three().call([1, 2, 3]);
        assert_eq!(complete.call([4]).unwrap_err(), CurryError::Saturated);
    }

    #[rstest]
    fn test_failed_continuation_keeps_result() {
        let complete = curried_add_three().call([1, 2, 3]);
        assert!(complete.call([4]).is_err());
        assert!(complete.call([5, 6]).is_err());
        assert_eq!(complete.complete(), Some(6));
    }

    #[rstest]
    fn test_complete_has_no_partial() {
        assert!(curried_add_three().call([1, 2, 3]).partial().is_none());
        assert!(curried_add_three().call([1]).complete().is_none());
    }
}

// =============================================================================
// Heterogeneous Arguments
// =============================================================================

mod heterogeneous_tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Clone)]
    enum Argument {
        Text(String),
        Repeat(usize),
        Separator(&'static str),
    }

    fn repeat_text(arguments: &[Argument]) -> Option<String> {
        match arguments {
            [
                Argument::Text(text),
                Argument::Repeat(times),
                Argument::Separator(separator),
                ..,
            ] => Some(vec![text.as_str(); *times].join(*separator)),
            _ => None,
        }
    }

    #[rstest]
    fn test_enum_arguments_dispatch_on_completion() {
        let curried = curry(3, repeat_text);
        let result = curried
            .call([Argument::Text("ab".to_string())])
            .call([Argument::Repeat(3), Argument::Separator("-")]);
        assert_eq!(
            result.unwrap().complete(),
            Some(Some("ab-ab-ab".to_string()))
        );
    }

    #[rstest]
    fn test_enum_arguments_in_wrong_position() {
        let curried = curry(3, repeat_text);
        let result = curried.call([
            Argument::Repeat(3),
            Argument::Text("ab".to_string()),
            Argument::Separator("-"),
        ]);
        assert_eq!(result.complete(), Some(None));
    }

    #[rstest]
    fn test_function_runs_once_per_completion() {
        let calls = Rc::new(std::cell::Cell::new(0));
        let counter = Rc::clone(&calls);
        let curried = curry(2, move |arguments: &[Argument]| {
            counter.set(counter.get() + 1);
            arguments.len()
        });

        let partial = curried.call([Argument::Repeat(1)]).partial().unwrap();
        let _ = partial.call([Argument::Repeat(2)]);
        let _ = partial.call([Argument::Repeat(3)]);

        assert_eq!(calls.get(), 2);
    }
}

// =============================================================================
// flip
// =============================================================================

mod flip_tests {
    use super::*;

    #[rstest]
    fn test_flip_swaps_arguments() {
        let divide = |numerator: f64, denominator: f64| numerator / denominator;
        let flipped = flip(divide);
        assert!((flipped(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_flip_with_application() {
        let call_with = |curried: Curried<i32, i32>, arguments: Vec<i32>| curried.call(arguments);
        let arguments_first = flip(call_with);
        let result = arguments_first(vec![1, 2, 3], curried_add_three());
        assert!(matches!(result, Application::Complete(6)));
    }
}
