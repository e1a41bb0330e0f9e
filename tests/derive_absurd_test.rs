//! Tests for #[derive(Absurd)]

use tola_fn::{Absurd, Always, NeverResult, always};

#[derive(Absurd)]
enum NoError {}

#[derive(Absurd)]
pub enum Unreachable {}

mod nested {
    #[derive(tola_fn::Absurd)]
    pub enum Hidden {}
}

fn lift<T, E: Absurd>(r: Result<T, E>) -> T {
    match r {
        Ok(value) => value,
        Err(e) => e.absurd(),
    }
}

#[test]
fn test_derived_enum_eliminates() {
    assert_eq!(lift::<_, NoError>(Ok(1)), 1);
    assert_eq!(lift::<_, Unreachable>(Ok("x")), "x");
    assert_eq!(lift::<_, nested::Hidden>(Ok(2.5)), 2.5);
}

#[test]
fn test_derived_enum_widens_error() {
    fn step() -> Result<u32, NoError> {
        Ok(10)
    }
    let widened: Result<u32, String> = step().map_err(|e| e.absurd());
    assert_eq!(widened, Ok(10));
}

#[test]
fn test_mixes_with_never() {
    let a: Always<u8> = always(1);
    let b: Result<u8, NoError> = Ok(2);
    assert_eq!(a.unwrap_always() + lift(b), 3);
}
