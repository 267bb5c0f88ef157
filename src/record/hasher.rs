//! Hasher selection for the record key index.
//!
//! The `fxhash` feature takes precedence over `ahash`; without either the
//! standard library's `RandomState` is used.

#[cfg(feature = "fxhash")]
pub type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type KeyHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type KeyHasher = std::collections::hash_map::RandomState;
