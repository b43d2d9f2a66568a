//! Single-pass byte scanner.
//!
//! Every function here takes a cursor (`&mut &[u8]`) positioned at the first
//! byte of a token and moves it just past that token. Nothing is copied and
//! no tree is built. The input is never validated: on malformed JSON a scan
//! may stop early or late, but it never reads past the end of the buffer.

mod container;
mod number;
mod strings;

pub use container::{skip_array, skip_object};
pub use number::skip_number;
pub use strings::{skip_string, take_string};

use crate::classify::is_whitespace;

/// Advance past ASCII whitespace (space, tab, newline, carriage return).
#[inline]
pub fn skip_whitespace(input: &mut &[u8]) {
    let s = *input;
    let n = s.iter().position(|&b| !is_whitespace(b)).unwrap_or(s.len());
    *input = &s[n..];
}

/// Advance past one structural byte (`{ } [ ] : ,`) and the whitespace after it.
#[inline]
pub fn skip_separator(input: &mut &[u8]) {
    advance(input, 1);
    skip_whitespace(input);
}

/// Advance past one value of any kind, dispatching on its lead byte.
///
/// `true` and `null` are skipped as four bytes and `false` as five without
/// checking the letters. Anything that is not a container, string or literal
/// is scanned as a number.
pub fn skip_value(input: &mut &[u8]) {
    match input.first() {
        Some(b'{') => skip_object(input),
        Some(b'[') => skip_array(input),
        Some(b'"') => skip_string(input),
        Some(b't' | b'n') => advance(input, 4),
        Some(b'f') => advance(input, 5),
        Some(_) => skip_number(input),
        None => {}
    }
}

/// Length in bytes of the value at the start of `s`.
#[inline]
pub fn value_len(s: &[u8]) -> usize {
    let mut rest = s;
    skip_value(&mut rest);
    s.len() - rest.len()
}

/// The nearest non-whitespace byte before `at`. Falls back to `s[at]` when
/// only whitespace precedes it.
pub fn prev_significant(s: &[u8], at: usize) -> Option<u8> {
    let at = at.min(s.len());
    s[..at]
        .iter()
        .rev()
        .copied()
        .find(|&b| !is_whitespace(b))
        .or_else(|| s.get(at).copied())
}

#[inline]
fn advance(input: &mut &[u8], n: usize) {
    let s = *input;
    *input = &s[n.min(s.len())..];
}
