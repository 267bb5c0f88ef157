//! # recordwise
//!
//! Functional iteration helpers over insertion-ordered records, together
//! with curry and flip combinators.
//!
//! ## Overview
//!
//! - **Records**: an immutable, insertion-ordered mapping from string keys to
//!   values ([`record::Record`], [`record!`])
//! - **Iteration**: `map`, `filter`, `for_each` and `reduce` over a record's
//!   entries, in direct, indexed, callback-first, record-first and fallible
//!   forms ([`iterate`])
//! - **Currying**: arity-based auto-currying and argument flipping
//!   ([`curry`](mod@curry))
//!
//! ## Feature Flags
//!
//! - `iterate`: Iteration helpers
//! - `curry`: Currying and flip combinators
//! - `serde`: `Serialize`/`Deserialize` for records
//! - `fxhash` / `ahash`: Faster hashers for the record key index
//! - `tracing`: Trace events from curried calls and empty reductions
//! - `full`: Enable `iterate`, `curry`, `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "iterate")]
//! # {
//! use recordwise::prelude::*;
//! use recordwise::record;
//!
//! let record = record! { "foo" => "bar", "doge" => "wow" };
//!
//! let shout = callback_first::map(|value: &&str, _: &str, _| value.to_uppercase());
//! assert_eq!(shout(&record), record_first(&record).map(|value, _, _| value.to_uppercase()));
//! assert_eq!(shout(&record)["doge"], "WOW");
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the record type and every helper.
///
/// # Usage
///
/// ```rust
/// use recordwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::record::{Entry, Record};

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "iterate")]
    pub use crate::iterate::*;
}

pub mod record;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "iterate")]
pub mod iterate;
