#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (and `std::error::Error` for `Never`)
// - alloc: enables `fix_boxed` in no_std

//! # tola-fn
//!
//! Small functional-programming helpers.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Never`], [`absurd`] | Uninhabited type and its eliminator |
//! | [`Absurd`] | Eliminator as a trait, derivable for empty enums |
//! | [`Always`], [`NeverResult`] | Results that cannot fail |
//! | [`void`], [`voided`] | Discard a value, return `()` |
//! | [`fix`], [`fix2`], [`fix3`] | Anonymous recursion for 1-3 arguments |
//!
//! ## Quick Start
//!
//! ```
//! use tola_fn::prelude::*;
//!
//! #[derive(Absurd)]
//! enum Unreachable {}
//!
//! fn lift<T>(r: Result<T, Unreachable>) -> T {
//!     match r {
//!         Ok(v) => v,
//!         Err(e) => e.absurd(),
//!     }
//! }
//! assert_eq!(lift(Ok::<_, Unreachable>(3)), 3);
//!
//! let fib = fix(|this, n: u64| -> u64 {
//!     if n < 2 { n } else { this(n - 1) + this(n - 2) }
//! });
//! assert_eq!(fib(10), 55);
//!
//! let () = void(fib(3));
//! ```

// Allow `::tola_fn` to work inside the crate itself
extern crate self as tola_fn;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod fix;
pub mod never;
pub mod void;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use fix::{fix, fix2, fix3};
#[cfg(feature = "alloc")]
pub use fix::{fix_boxed, BoxedFn};
pub use never::{absurd, always, Absurd, Always, Never, NeverResult};
pub use void::{void, voided};

// Derive macro shares the trait's name; they live in different namespaces.
pub use macros::Absurd;

pub mod prelude {
    pub use crate::fix::{fix, fix2, fix3};
    #[cfg(feature = "alloc")]
    pub use crate::fix::{fix_boxed, BoxedFn};
    pub use crate::never::{absurd, always, Absurd, Always, Never, NeverResult};
    pub use crate::void::{void, voided};
    pub use macros::Absurd;
}
