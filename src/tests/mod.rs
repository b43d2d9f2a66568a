use super::*;

// Shared test helpers
fn text(b: &[u8]) -> &str {
    std::str::from_utf8(b).unwrap()
}

fn scan(f: fn(&mut &[u8]), input: &str) -> String {
    let mut rest = input.as_bytes();
    f(&mut rest);
    text(rest).to_string()
}

// LCG: constants from Numerical Recipes
fn lcg_next(x: &mut u64) -> u64 {
    *x = x.wrapping_mul(1664525).wrapping_add(1013904223);
    *x >> 24
}

mod scanner;
