use crate::classify::is_number_byte;

/// Advance past the longest run of number bytes (`0-9 + - . e E`).
#[inline]
pub fn skip_number(input: &mut &[u8]) {
    let s = *input;
    let n = s.iter().position(|&b| !is_number_byte(b)).unwrap_or(s.len());
    *input = &s[n..];
}
