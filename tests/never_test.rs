//! Tests for the uninhabited type and its eliminators

use std::collections::HashSet;
use std::convert::Infallible;
use std::error::Error;
use std::str::FromStr;
use tola_fn::prelude::*;

#[derive(Debug, PartialEq)]
struct ConfigError(&'static str);

fn infallible_step(x: u32) -> Always<u32> {
    Ok(x * 2)
}

fn fallible_step(x: u32) -> Result<u32, ConfigError> {
    if x > 10 { Err(ConfigError("too large")) } else { Ok(x + 1) }
}

// =============================================================================
// absurd / widen_err
// =============================================================================

#[test]
fn test_absurd_widens_error_channel() {
    let pipeline = |x: u32| -> Result<u32, ConfigError> {
        let doubled = infallible_step(x).map_err(absurd)?;
        fallible_step(doubled)
    };

    assert_eq!(pipeline(3), Ok(7));
    assert_eq!(pipeline(6), Err(ConfigError("too large")));
}

#[test]
fn test_widen_err_with_question_mark() {
    fn run(x: u32) -> Result<u32, ConfigError> {
        let v = infallible_step(x).widen_err()?;
        Ok(v)
    }
    assert_eq!(run(4), Ok(8));
}

#[test]
fn test_unwrap_always() {
    assert_eq!(infallible_step(21).unwrap_always(), 42);
    assert_eq!(always(vec![1, 2]).unwrap_always(), vec![1, 2]);
}

// =============================================================================
// Infallible interop
// =============================================================================

#[test]
fn test_infallible_into_never() {
    let parsed: Result<String, Infallible> = String::from_str("text");
    let parsed: Always<String> = parsed.map_err(Never::from);
    assert_eq!(parsed.unwrap_always(), "text");
}

#[test]
fn test_never_into_infallible() {
    let r: Result<u8, Infallible> = always(3u8).map_err(Infallible::from);
    assert_eq!(r, Ok(3));
}

#[test]
fn test_absurd_trait_on_infallible() {
    let r: Result<u8, Infallible> = Ok(9);
    assert_eq!(r.unwrap_or_else(|e| e.absurd()), 9);
}

// =============================================================================
// Trait bounds
// =============================================================================

fn boxed_error<E: Error + Send + Sync + 'static>(r: Result<u8, E>) -> Result<u8, Box<dyn Error + Send + Sync>> {
    r.map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
}

#[test]
fn test_never_satisfies_error_bounds() {
    assert_eq!(boxed_error(always(5u8)).ok(), Some(5));
}

#[test]
fn test_never_in_collections() {
    let set: HashSet<Never> = HashSet::new();
    assert!(set.is_empty());

    let mut sorted: Vec<Always<u8>> = vec![Ok(3), Ok(1), Ok(2)];
    sorted.sort();
    assert_eq!(sorted, vec![Ok(1), Ok(2), Ok(3)]);
}

#[test]
fn test_never_is_zero_sized() {
    assert_eq!(std::mem::size_of::<Never>(), 0);
    assert_eq!(std::mem::size_of::<Always<u64>>(), std::mem::size_of::<u64>());
}
