//! The uninhabited type and its eliminator.
//!
//! `Never` has no variants, so no value of it can exist. A function that
//! accepts one is a proof that its call site is unreachable, and [`absurd`]
//! turns that proof into a value of whatever type the context asks for.
//!
//! ```
//! use tola_fn::{absurd, Always, Never};
//!
//! fn parse_infallible(s: &str) -> Always<usize> {
//!     Ok(s.len())
//! }
//!
//! #[derive(Debug)]
//! struct ParseError;
//!
//! // Re-type the error channel without a fallible conversion.
//! let widened: Result<usize, ParseError> = parse_infallible("abc").map_err(absurd);
//! assert_eq!(widened.unwrap(), 3);
//! ```

use core::convert::Infallible;
use core::fmt;

/// A type with no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Never {}

/// Eliminate a `Never` into any type.
#[inline(always)]
pub fn absurd<T>(never: Never) -> T {
    match never {}
}

/// Uninhabited types that can be eliminated into any type.
///
/// Derive it on your own empty enums with `#[derive(Absurd)]`. Enums with
/// variants are rejected:
///
/// ```compile_fail
/// #[derive(tola_fn::Absurd)]
/// enum Inhabited { Value }
/// ```
///
/// and so are structs:
///
/// ```compile_fail
/// #[derive(tola_fn::Absurd)]
/// struct Unit;
/// ```
pub trait Absurd: Sized {
    /// Turn an impossible value into any type.
    fn absurd<T>(self) -> T;
}

impl Absurd for Never {
    #[inline(always)]
    fn absurd<T>(self) -> T {
        match self {}
    }
}

impl Absurd for Infallible {
    #[inline(always)]
    fn absurd<T>(self) -> T {
        match self {}
    }
}

/// A result whose failure mode is impossible.
pub type Always<T> = Result<T, Never>;

/// Wrap a value in a result with an impossible failure mode.
#[inline]
pub fn always<T>(value: T) -> Always<T> {
    Ok(value)
}

/// Operations on results whose error type is [`Never`].
pub trait NeverResult<T> {
    /// Take the success value out. Cannot panic.
    fn unwrap_always(self) -> T;

    /// Re-type the error channel to any `E`.
    fn widen_err<E>(self) -> Result<T, E>;
}

impl<T> NeverResult<T> for Result<T, Never> {
    #[inline]
    fn unwrap_always(self) -> T {
        match self {
            Ok(value) => value,
            Err(never) => absurd(never),
        }
    }

    #[inline]
    fn widen_err<E>(self) -> Result<T, E> {
        self.map_err(absurd)
    }
}

// =============================================================================
// Infallible interop
// =============================================================================

impl From<Infallible> for Never {
    fn from(infallible: Infallible) -> Self {
        match infallible {}
    }
}

impl From<Never> for Infallible {
    fn from(never: Never) -> Self {
        match never {}
    }
}

// =============================================================================
// Error impls
// =============================================================================

impl fmt::Display for Never {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Never {}
