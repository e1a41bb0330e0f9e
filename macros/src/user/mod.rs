//! User-facing macro implementations

mod absurd;

pub use absurd::expand_derive_absurd;
