//! Anonymous recursion and impossible errors
//!
//! Run with: cargo run --example anonymous_recursion

use tola_fn::prelude::*;

// =============================================================================
// Step 1: Recursive closures with fix / fix2 / fix3
// =============================================================================

fn recursion() {
    let factorial = fix(|this, n: u64| -> u64 { if n == 0 { 1 } else { n * this(n - 1) } });

    let pow = fix2(|this, base: u64, exp: u32| -> u64 {
        match exp {
            0 => 1,
            e if e % 2 == 0 => this(base * base, e / 2),
            e => base * this(base, e - 1),
        }
    });

    let sum = fix3(|this, lo: u64, hi: u64, acc: u64| -> u64 {
        if lo >= hi { acc } else { this(lo + 1, hi, acc + lo) }
    });

    for n in 0..=10 {
        println!("{n}! = {}", factorial(n));
    }
    println!("2^10 = {}", pow(2, 10));
    println!("sum(0..100) = {}", sum(0, 100, 0));
}

// =============================================================================
// Step 2: Error channels that cannot fail
// =============================================================================

#[derive(Absurd)]
enum NoError {}

#[derive(Debug)]
struct ParseError(String);

fn double(x: u32) -> Always<u32> {
    always(x * 2)
}

fn halve(x: u32) -> Result<u32, NoError> {
    Ok(x / 2)
}

fn parse(s: &str) -> Result<u32, ParseError> {
    s.parse().map_err(|_| ParseError(s.to_string()))
}

fn pipeline(s: &str) -> Result<u32, ParseError> {
    let n = parse(s)?;
    let n = double(n).widen_err()?;
    let n = halve(n).map_err(|e| e.absurd())?;
    Ok(n)
}

fn errors() {
    println!("pipeline(\"21\") = {:?}", pipeline("21"));
    println!("pipeline(\"x\") = {:?}", pipeline("x"));
    println!("double(4) = {}", double(4).unwrap_always());
}

fn main() {
    recursion();
    errors();
    // Side-effecting calls in unit position.
    [1, 2, 3].into_iter().for_each(voided(|x: u32| double(x)));
    void(pipeline("7"));
}
