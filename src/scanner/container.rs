use super::strings::string_end;
use memchr::memchr3;

/// Advance past an object, counting `{`/`}` depth. Strings are skipped whole,
/// so braces inside string content are never counted.
#[inline]
pub fn skip_object(input: &mut &[u8]) {
    skip_nested(input, b'{', b'}');
}

/// Advance past an array, counting `[`/`]` depth. Strings are opaque.
#[inline]
pub fn skip_array(input: &mut &[u8]) {
    skip_nested(input, b'[', b']');
}

fn skip_nested(input: &mut &[u8], open: u8, close: u8) {
    let s = *input;
    if s.is_empty() {
        return;
    }
    let mut i = 1usize; // opening delimiter
    let mut depth = 1usize;
    while depth > 0 {
        let Some(p) = s.get(i..).and_then(|rest| memchr3(open, close, b'"', rest)) else {
            // unclosed: consume everything
            i = s.len();
            break;
        };
        i += p;
        match s[i] {
            b'"' => {
                i = match string_end(&s[i..]) {
                    Some(end) => i + end + 1,
                    None => s.len(),
                };
            }
            b if b == open => {
                depth += 1;
                i += 1;
            }
            _ => {
                depth -= 1;
                i += 1;
            }
        }
    }
    *input = &s[i.min(s.len())..];
}
