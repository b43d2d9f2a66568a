use memchr::memchr2;

/// Index of the closing quote of the string starting at `s[0]`, or `None`
/// when the string runs off the end of the buffer.
///
/// Any byte after a backslash is skipped, so `\"` never terminates. Escapes
/// are not checked for legality.
#[inline]
pub(crate) fn string_end(s: &[u8]) -> Option<usize> {
    let mut i = 1usize;
    while let Some(rest) = s.get(i..) {
        let p = memchr2(b'"', b'\\', rest)?;
        if rest[p] == b'"' {
            return Some(i + p);
        }
        i += p + 2;
    }
    None
}

/// Advance past a double-quoted string. An unterminated string consumes the
/// rest of the buffer.
#[inline]
pub fn skip_string(input: &mut &[u8]) {
    let s = *input;
    *input = match string_end(s) {
        Some(end) => &s[end + 1..],
        None => &s[s.len()..],
    };
}

/// Take the raw content between the quotes and advance past the string.
/// Escape sequences are returned as-is, still escaped.
pub fn take_string<'i>(input: &mut &'i [u8]) -> &'i [u8] {
    let s = *input;
    match string_end(s) {
        Some(end) => {
            *input = &s[end + 1..];
            &s[1..end]
        }
        None => {
            *input = &s[s.len()..];
            s.get(1..).unwrap_or_default()
        }
    }
}
