//! Arity-based auto-currying.
//!
//! A [`Curried`] value wraps a function of fixed arity and accepts its
//! arguments across any number of calls, in chunks of any size. Once the
//! accumulated arguments reach the arity the function runs; until then every
//! call returns a new, independent partial application.
//!
//! # Design Decisions
//!
//! The wrapped function is shared through `std::rc::Rc`, like the closures
//! produced by the `curry` macros of functional libraries, so partial
//! applications are cheap to create and can be reused. Accumulated arguments
//! are copied into each new partial application, which keeps chains isolated
//! from each other. Up to four arguments are stored inline.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use super::CurryError;

const INLINE_ARGUMENTS: usize = 4;

type Arguments<A> = SmallVec<[A; INLINE_ARGUMENTS]>;

/// Wraps `function` so it can be applied to its arguments incrementally.
///
/// `arity` is the number of arguments after which `function` runs. It is
/// fixed here and never re-inspected. When a call brings the accumulated
/// arguments to `arity` or beyond, `function` receives all of them, including
/// any past the arity.
///
/// # Examples
///
/// ```rust
/// use recordwise::curry::curry;
///
/// let add_three = curry(3, |arguments: &[i32]| arguments.iter().sum::<i32>());
///
/// // All at once
/// assert_eq!(add_three.call([1, 2, 3]).complete(), Some(6));
///
/// // One, then two more
/// let with_one = add_three.call([1]).partial().unwrap();
/// assert_eq!(with_one.call([2, 3]).complete(), Some(6));
///
/// // Extra arguments are passed through
/// assert_eq!(add_three.call([1, 2, 3, 4]).complete(), Some(10));
/// ```
pub fn curry<A, R, F>(arity: usize, function: F) -> Curried<A, R>
where
    F: Fn(&[A]) -> R + 'static,
{
    Curried {
        function: Rc::new(function),
        arity,
        applied: SmallVec::new(),
    }
}

/// A function of fixed arity together with the arguments applied so far.
///
/// Created by [`curry`] or by a partial [`Curried::call`].
pub struct Curried<A, R> {
    function: Rc<dyn Fn(&[A]) -> R>,
    arity: usize,
    applied: Arguments<A>,
}

impl<A, R> Curried<A, R> {
    /// Returns the number of arguments the wrapped function waits for.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the arguments accumulated so far.
    #[inline]
    #[must_use]
    pub fn applied(&self) -> &[A] {
        &self.applied
    }

    /// Returns how many more arguments are needed before the function runs.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.applied.len())
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Applies `arguments` after the ones accumulated so far.
    ///
    /// Returns [`Application::Complete`] with the function's result if the
    /// arity is reached, and [`Application::Partial`] otherwise. `self` is
    /// left untouched, so the same partial application can be continued in
    /// different ways.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordwise::curry::curry;
    ///
    /// let join = curry(2, |parts: &[&str]| parts.join("-"));
    /// let prefixed = join.call(["pre"]).partial().unwrap();
    ///
    /// assert_eq!(prefixed.call(["fix"]).complete(), Some("pre-fix".to_string()));
    /// assert_eq!(prefixed.call(["view"]).complete(), Some("pre-view".to_string()));
    /// ```
    pub fn call<I>(&self, arguments: I) -> Application<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut applied = self.applied.clone();
        applied.extend(arguments);

        if applied.len() >= self.arity {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                arity = self.arity,
                supplied = applied.len(),
                "curried function saturated"
            );
            Application::Complete((self.function)(applied.as_slice()))
        } else {
            Application::Partial(Self {
                function: Rc::clone(&self.function),
                arity: self.arity,
                applied,
            })
        }
    }

    /// Applies a single argument. Shorthand for `call([argument])`.
    pub fn call_one(&self, argument: A) -> Application<A, R> {
        self.call(std::iter::once(argument))
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            applied: self.applied.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("applied", &self.applied.as_slice())
            .finish_non_exhaustive()
    }
}

/// The outcome of calling a [`Curried`] function.
#[derive(Debug, Clone)]
pub enum Application<A, R> {
    /// The arity was reached and the function ran.
    Complete(R),
    /// More arguments are needed.
    Partial(Curried<A, R>),
}

impl<A, R> Application<A, R> {
    /// Returns `true` if the function ran.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the result if the function ran.
    #[must_use]
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the partial application if more arguments are needed.
    #[must_use]
    pub fn partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }
}

impl<A: Clone, R> Application<A, R> {
    /// Continues the chain with more arguments.
    ///
    /// The application is borrowed, so a completed result stays with the
    /// caller when this returns an error.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::Saturated`] if the function already ran.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordwise::curry::{CurryError, curry};
    ///
    /// let volume = curry(3, |sides: &[f64]| sides.iter().product::<f64>());
    /// let result = volume.call([2.0]).call([3.0]).and_then(|next| next.call([4.0]));
    /// let complete = result.unwrap();
    ///
    /// assert_eq!(complete.call([5.0]).unwrap_err(), CurryError::Saturated);
    /// assert_eq!(complete.complete(), Some(24.0));
    /// ```
    pub fn call<I>(&self, arguments: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Complete(_) => Err(CurryError::Saturated),
            Self::Partial(curried) => Ok(curried.call(arguments)),
        }
    }
}

static_assertions::assert_not_impl_any!(Curried<i32, i32>: Send, Sync);
