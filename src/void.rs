//! Value-discarding conversion.

/// Drop a value and return `()`.
///
/// Handy as a function argument where a unit result is expected:
///
/// ```
/// use tola_fn::void;
///
/// let len: Option<()> = Some("hello").map(str::len).map(void);
/// assert_eq!(len, Some(()));
/// ```
#[inline(always)]
pub fn void<T>(value: T) {
    drop(value)
}

/// Wrap `f` so that its result is discarded.
///
/// ```
/// use tola_fn::voided;
///
/// let mut seen = Vec::new();
/// [1, 2, 3].into_iter().for_each(voided(|x| {
///     seen.push(x);
///     x * 2
/// }));
/// assert_eq!(seen, [1, 2, 3]);
/// ```
#[inline]
pub fn voided<A, B, F>(mut f: F) -> impl FnMut(A)
where
    F: FnMut(A) -> B,
{
    move |a| void(f(a))
}
