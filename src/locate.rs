//! Resolution of a single path segment against a container.

use crate::scanner::{skip_separator, skip_value, skip_whitespace, take_string, value_len};

/// Where one accessor points inside a buffer. Offsets are relative to the
/// slice passed to [`locate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Offset of the first byte of the member's value.
    Found(usize),
    /// Offset of the container's closing `}` or `]`. The accessor names a
    /// missing key, or an index equal to the array length.
    Append(usize),
    /// Offset of a `null` token addressed with index `0`.
    NullAppend(usize),
    NotFound,
}


/// Parse an array index. Only non-negative decimal integers are accepted.
#[inline]
pub fn parse_index(accessor: &str) -> Option<usize> {
    accessor.parse::<usize>().ok()
}

/// Locate `accessor` in the container (or `null`) at the start of `json`,
/// after any leading whitespace.
///
/// Object keys are compared byte-for-byte against the raw, still-escaped key
/// text. An absent key resolves to [`Location::Append`] at the closing brace;
/// an index equal to the array length resolves to [`Location::Append`] at the
/// closing bracket. Whether an append point is acceptable is the caller's
/// decision: only the last segment of a path may append.
pub fn locate(json: &[u8], accessor: &str) -> Location {
    let total = json.len();
    let mut input = json;
    skip_whitespace(&mut input);
    let offset = |rest: &[u8]| total - rest.len();

    match input.first() {
        Some(b'{') => {
            let key = accessor.as_bytes();
            skip_separator(&mut input); // {
            loop {
                match input.first() {
                    None => return Location::NotFound,
                    Some(b'}') => return Location::Append(offset(input)),
                    Some(_) => {}
                }
                let k = take_string(&mut input);
                skip_whitespace(&mut input);
                skip_separator(&mut input); // :
                if k == key {
                    return Location::Found(offset(input));
                }
                skip_value(&mut input);
                skip_whitespace(&mut input);
                if input.first() == Some(&b',') {
                    skip_separator(&mut input);
                }
            }
        }
        Some(b'[') => {
            let Some(n) = parse_index(accessor) else {
                return Location::NotFound;
            };
            skip_separator(&mut input); // [
            let mut len = 0usize;
            while len < n {
                match input.first() {
                    None => return Location::NotFound,
                    Some(b']') => break,
                    Some(_) => {}
                }
                let before = input.len();
                skip_value(&mut input);
                skip_whitespace(&mut input);
                if input.first() == Some(&b',') {
                    skip_separator(&mut input);
                }
                if input.len() == before {
                    // no progress: not a value we can step over
                    return Location::NotFound;
                }
                len += 1;
            }
            if len < n {
                return Location::NotFound;
            }
            match input.first() {
                Some(b']') => Location::Append(offset(input)),
                Some(_) => Location::Found(offset(input)),
                None => Location::NotFound,
            }
        }
        Some(b'n') if input.starts_with(b"null") => match parse_index(accessor) {
            Some(0) => Location::NullAppend(offset(input)),
            _ => Location::NotFound,
        },
        _ => Location::NotFound,
    }
}

/// Resolve every segment of `path` and return the bytes of the value it
/// names. Append points and `null` promotion do not count as found. An empty
/// path names the top-level value.
pub fn find<'j>(json: &'j [u8], path: &str) -> Option<&'j [u8]> {
    let mut cursor = 0usize;
    if path.is_empty() {
        let mut rest = json;
        skip_whitespace(&mut rest);
        cursor = json.len() - rest.len();
    } else {
        for acc in path.split('.') {
            match locate(&json[cursor..], acc) {
                Location::Found(off) => cursor += off,
                _ => return None,
            }
        }
    }
    let rest = &json[cursor..];
    if rest.is_empty() {
        return None;
    }
    Some(&rest[..value_len(rest)])
}
