//! Procedural macros for tola-fn
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Absurd)]` | empty enum | Implement `tola_fn::Absurd` |

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod user;

/// Derive macro to implement the `Absurd` trait for an uninhabited enum.
///
/// Only enums with no variants are accepted; anything else is a compile
/// error.
///
/// # Usage
/// ```ignore
/// #[derive(Absurd)]
/// enum NoError {}
///
/// fn lift<T>(r: Result<T, NoError>) -> T {
///     r.unwrap_or_else(|e| e.absurd())
/// }
/// ```
#[proc_macro_derive(Absurd)]
pub fn derive_absurd(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_absurd(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
