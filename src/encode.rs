//! Value encoder: turns a [`Value`] into JSON text.
//!
//! Primitives are written directly. Anything else goes through
//! [`MarshalJson`], which is also the seam for plugging in a generic encoder
//! (see [`Serialized`] with the `serde` feature).

use crate::emit::Emitter;
use crate::error::EncodeError;
use crate::options::Options;
use std::fmt;

/// A type that produces its own JSON text.
///
/// The output is emitted verbatim and is not checked.
pub trait MarshalJson {
    fn marshal_json(&self) -> Result<Vec<u8>, EncodeError>;
}

/// A value to be written at a path.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a str),
    /// Pre-encoded JSON text, emitted as-is.
    Raw(&'a [u8]),
    Marshal(&'a dyn MarshalJson),
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Raw(b) => f
                .debug_tuple("Raw")
                .field(&String::from_utf8_lossy(b))
                .finish(),
            Value::Marshal(_) => f.write_str("Marshal(..)"),
        }
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident => $($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                #[inline]
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_lossless!(Int => i8, i16, i32, i64);
impl_from_lossless!(Uint => u8, u16, u32, u64);
impl_from_lossless!(Float => f32, f64);
impl_from_lossless!(Bool => bool);

impl From<isize> for Value<'_> {
    #[inline]
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value<'_> {
    #[inline]
    fn from(v: usize) -> Self {
        Value::Uint(v as u64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    #[inline]
    fn from(s: &'a String) -> Self {
        Value::Str(s.as_str())
    }
}

impl<'a> From<&'a dyn MarshalJson> for Value<'a> {
    #[inline]
    fn from(m: &'a dyn MarshalJson) -> Self {
        Value::Marshal(m)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Encode with default options.
pub fn encode<'a>(value: impl Into<Value<'a>>) -> Result<Vec<u8>, EncodeError> {
    encode_with(value, &Options::default())
}

pub fn encode_with<'a>(
    value: impl Into<Value<'a>>,
    opts: &Options,
) -> Result<Vec<u8>, EncodeError> {
    let value = value.into();
    match value {
        Value::Raw(raw) => Ok(raw.to_vec()),
        Value::Marshal(m) => m.marshal_json(),
        _ => {
            let mut out = Vec::with_capacity(16);
            encode_into(&mut out, value, opts)?;
            Ok(out)
        }
    }
}

pub(crate) fn encode_into<E: Emitter>(
    out: &mut E,
    value: Value<'_>,
    opts: &Options,
) -> Result<(), EncodeError> {
    match value {
        Value::Null => out.emit_str("null"),
        Value::Bool(true) => out.emit_str("true"),
        Value::Bool(false) => out.emit_str("false"),
        Value::Int(v) => {
            if v < 0 {
                out.emit_byte(b'-');
            }
            emit_u64(out, v.unsigned_abs());
        }
        Value::Uint(v) => emit_u64(out, v),
        Value::Float(v) => {
            if !v.is_finite() {
                return Err(EncodeError::NonFinite(v));
            }
            // Display is the shortest round-trip form and never uses exponents.
            out.emit_str(&v.to_string());
        }
        Value::Str(s) => emit_json_string(out, s, opts.ensure_ascii),
        Value::Raw(raw) => out.emit_bytes(raw),
        Value::Marshal(m) => out.emit_bytes(&m.marshal_json()?),
    }
    Ok(())
}

fn emit_u64<E: Emitter>(out: &mut E, mut v: u64) {
    let mut buf = [0u8; 20];
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    out.emit_bytes(&buf[i..]);
}

/// Write `s` as a quoted JSON string.
pub(crate) fn emit_json_string<E: Emitter>(out: &mut E, s: &str, ensure_ascii: bool) {
    // Fast path: nothing to escape, write as one slice.
    let clean = s
        .bytes()
        .all(|b| b != b'"' && b != b'\\' && b > 0x1F && (!ensure_ascii || b < 0x80));
    if clean {
        out.emit_byte(b'"');
        out.emit_str(s);
        out.emit_byte(b'"');
        return;
    }

    out.emit_byte(b'"');
    let mut start = 0usize; // start of current safe run
    for (i, ch) in s.char_indices() {
        let code = ch as u32;
        let needs_escape =
            ch == '"' || ch == '\\' || code <= 0x1F || (ensure_ascii && code > 0x7F);
        if !needs_escape {
            continue;
        }
        if i > start {
            out.emit_str(&s[start..i]);
        }
        match ch {
            '"' => out.emit_str("\\\""),
            '\\' => out.emit_str("\\\\"),
            '\u{08}' => out.emit_str("\\b"),
            '\u{0C}' => out.emit_str("\\f"),
            '\n' => out.emit_str("\\n"),
            '\r' => out.emit_str("\\r"),
            '\t' => out.emit_str("\\t"),
            _ if code <= 0xFFFF => out.emit_str(&format!("\\u{:04x}", code)),
            _ => {
                let u = code - 0x1_0000;
                let hi = 0xD800 + ((u >> 10) & 0x3FF);
                let lo = 0xDC00 + (u & 0x3FF);
                out.emit_str(&format!("\\u{:04x}\\u{:04x}", hi, lo));
            }
        }
        start = i + ch.len_utf8();
    }
    if start < s.len() {
        out.emit_str(&s[start..]);
    }
    out.emit_byte(b'"');
}

/// Wraps any `Serialize` type so it can be written through `serde_json`.
#[cfg(feature = "serde")]
#[derive(Debug, Clone)]
pub struct Serialized<T>(pub T);

#[cfg(feature = "serde")]
impl<T: serde::Serialize> MarshalJson for Serialized<T> {
    fn marshal_json(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&self.0)?)
    }
}

#[cfg(feature = "serde")]
impl MarshalJson for serde_json::Value {
    fn marshal_json(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for Value<'a> {
    #[inline]
    fn from(v: &'a serde_json::Value) -> Self {
        Value::Marshal(v)
    }
}
