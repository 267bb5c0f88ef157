//! Currying and argument-order combinators.
//!
//! This module provides:
//!
//! - [`curry`]: wraps a function of fixed arity so its arguments can be
//!   supplied incrementally, in chunks of any size
//! - [`flip`]: swaps the arguments of a binary function
//!
//! # Currying
//!
//! ```text
//! curry(3, f).call([a]).call([b, c]) == f(&[a, b, c])
//! ```
//!
//! Every call either completes (the arity was reached) or returns a new
//! partial application holding its own copy of the arguments so far:
//!
//! ```rust
//! use recordwise::curry::{Application, curry};
//!
//! let sum = curry(3, |numbers: &[i32]| numbers.iter().sum::<i32>());
//!
//! let Application::Partial(with_ten) = sum.call([10]) else {
//!     unreachable!()
//! };
//! assert_eq!(with_ten.call([1, 2]).complete(), Some(13));
//! assert_eq!(with_ten.call([5, 5]).complete(), Some(20));
//! ```
//!
//! Arguments of different kinds can be carried by an enum; the wrapped
//! function matches on them once the arity is reached.
//!
//! # Flip
//!
//! ```rust
//! use recordwise::curry::flip;
//!
//! let divide = |numerator: i32, denominator: i32| numerator / denominator;
//! assert_eq!(flip(divide)(2, 10), 5);
//! ```

mod combinator;
mod curried;
mod error;

pub use combinator::flip;
pub use curried::{Application, Curried, curry};
pub use error::CurryError;
