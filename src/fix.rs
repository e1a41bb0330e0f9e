//! Fixed-point combinators for anonymous recursion.
//!
//! A Rust closure cannot name itself. `fix` hands the closure a reference
//! to the function being defined as its first argument instead:
//!
//! ```text
//! fix(f)(a)  ==  f(fix(f), a)
//! ```
//!
//! `fix2` and `fix3` do the same for two and three arguments. Larger
//! arities are not provided; bundle the arguments into a tuple and use
//! [`fix`].
//!
//! Every call builds a fresh `this` closure that borrows `f` and re-enters
//! the combinator. Nothing is cached between calls and nothing is allocated;
//! the recursion depth is exactly the depth `f` asks for.

/// Generate a fixed-point combinator and its step function for one arity.
///
/// `fix2(a: A, b: B)` expands to `pub fn fix2<A, B, R, F>` plus a private
/// `fix2_step` that performs one unfolding.
macro_rules! define_fix {
    ($(#[$meta:meta])* $name:ident ( $($arg:ident : $ty:ident),+ )) => {
        paste::paste! {
            $(#[$meta])*
            #[inline]
            pub fn $name<$($ty,)+ R, F>(f: F) -> impl Fn($($ty),+) -> R
            where
                F: Fn(&dyn Fn($($ty),+) -> R, $($ty),+) -> R,
            {
                move |$($arg: $ty),+| [<$name _step>](&f, $($arg),+)
            }

            fn [<$name _step>]<$($ty,)+ R, F>(f: &F, $($arg: $ty),+) -> R
            where
                F: Fn(&dyn Fn($($ty),+) -> R, $($ty),+) -> R,
            {
                let this = |$($arg: $ty),+| [<$name _step>](f, $($arg),+);
                f(&this, $($arg),+)
            }
        }
    };
}

define_fix! {
    /// Fixed point of a one-argument function.
    ///
    /// ```
    /// use tola_fn::fix;
    ///
    /// let factorial = fix(|this, n: u64| -> u64 {
    ///     if n == 0 { 1 } else { n * this(n - 1) }
    /// });
    /// assert_eq!(factorial(5), 120);
    /// ```
    fix(a: A)
}

define_fix! {
    /// Fixed point of a two-argument function.
    ///
    /// ```
    /// use tola_fn::fix2;
    ///
    /// let pow = fix2(|this, base: u64, exp: u32| -> u64 {
    ///     match exp {
    ///         0 => 1,
    ///         e if e % 2 == 0 => this(base * base, e / 2),
    ///         e => base * this(base, e - 1),
    ///     }
    /// });
    /// assert_eq!(pow(2, 10), 1024);
    /// ```
    fix2(a: A, b: B)
}

define_fix! {
    /// Fixed point of a three-argument function.
    ///
    /// ```
    /// use tola_fn::fix3;
    ///
    /// // Sum of lo..hi, accumulated.
    /// let sum = fix3(|this, lo: u32, hi: u32, acc: u32| -> u32 {
    ///     if lo >= hi { acc } else { this(lo + 1, hi, acc + lo) }
    /// });
    /// assert_eq!(sum(0, 5, 0), 10);
    /// ```
    fix3(a: A, b: B, c: C)
}

/// A type-erased single-argument function.
#[cfg(feature = "alloc")]
pub type BoxedFn<'a, A, R> = alloc::boxed::Box<dyn Fn(A) -> R + 'a>;

/// [`fix`], boxed so the result has a nameable type.
///
/// ```
/// use tola_fn::{fix_boxed, BoxedFn};
///
/// let table: Vec<BoxedFn<'static, u32, u32>> = vec![
///     fix_boxed(|this, n: u32| -> u32 { if n == 0 { 0 } else { 1 + this(n - 1) } }),
///     fix_boxed(|this, n: u32| -> u32 { if n < 2 { n } else { this(n - 1) + this(n - 2) } }),
/// ];
/// assert_eq!(table[0](4), 4);
/// assert_eq!(table[1](10), 55);
/// ```
#[cfg(feature = "alloc")]
pub fn fix_boxed<'a, A: 'a, R: 'a, F>(f: F) -> BoxedFn<'a, A, R>
where
    F: Fn(&dyn Fn(A) -> R, A) -> R + 'a,
{
    alloc::boxed::Box::new(fix(f))
}
