//! Set one value inside a JSON document, addressed by a dotted path, without
//! parsing the document into a tree.
//!
//! A path is a `.`-separated list of accessors: object keys or array indices.
//! Given `{"foo": {"bars": [{"baz": 3}]}}`, the path `foo.bars.0.baz` names
//! the `3`. The empty path names the whole document.
//!
//! A path is malformed when any segment does not exist. Malformed paths leave
//! the document unchanged; they are not errors. Two forms of "not yet there"
//! are allowed for the last segment only:
//!
//! - a missing object key appends `"key":value` to that object,
//! - an index equal to the array length appends to the array, and index `0`
//!   on `null` turns it into a one-element array.
//!
//! ```
//! let doc = br#"{"friends":["Andy","Carol"]}"#;
//! let out = jsonsplice::set(doc, "friends.2", "Sara").unwrap();
//! assert_eq!(out, br#"{"friends":["Andy","Carol","Sara"]}"#);
//! ```

mod classify;
pub mod cli;
mod emit;
pub mod encode;
pub mod error;
pub mod locate;
pub mod options;
mod rewrite;
pub mod scanner;

pub use encode::{MarshalJson, Value, encode, encode_with};
#[cfg(feature = "serde")]
pub use encode::Serialized;
pub use error::EncodeError;
pub use locate::{Location, locate};
pub use options::Options;
pub use rewrite::{Outcome, PatchLogEntry};

use rewrite::Logger;

/// Replace the value at `path` with `value`, returning a new buffer. If the
/// path is malformed the result is a copy of `json`.
pub fn set<'a>(json: &[u8], path: &str, value: impl Into<Value<'a>>) -> Result<Vec<u8>, EncodeError> {
    set_with(json, path, value, &Options::default())
}

/// Like [`set`], encoding `value` with `opts`.
pub fn set_with<'a>(
    json: &[u8],
    path: &str,
    value: impl Into<Value<'a>>,
    opts: &Options,
) -> Result<Vec<u8>, EncodeError> {
    let val = encode_with(value, opts)?;
    Ok(set_raw(json, path, &val))
}

/// Replace the value at `path` with pre-encoded JSON text `raw`. The text is
/// inserted verbatim.
pub fn set_raw(json: &[u8], path: &str, raw: &[u8]) -> Vec<u8> {
    rewrite::rewrite(json, path, raw, &mut Logger::disabled()).unwrap_or_else(|| json.to_vec())
}

/// Replace the value at `path` with `value`, reusing `json`'s storage when the
/// new text is no longer than the old value. The freed tail is padded with
/// spaces, so the document never shrinks. When the value does not fit, `json`
/// is replaced with a rebuilt document.
pub fn set_in_place<'a>(
    json: &mut Vec<u8>,
    path: &str,
    value: impl Into<Value<'a>>,
) -> Result<Outcome, EncodeError> {
    let val = encode(value)?;
    Ok(set_raw_in_place(json, path, &val))
}

/// [`set_in_place`] with pre-encoded JSON text.
pub fn set_raw_in_place(json: &mut Vec<u8>, path: &str, raw: &[u8]) -> Outcome {
    rewrite::rewrite_in_place(json, path, raw, &mut Logger::disabled())
}

/// [`set_with`] that also returns how each path segment was resolved.
/// Entries are only collected when `opts.logging` is set.
pub fn set_with_log<'a>(
    json: &[u8],
    path: &str,
    value: impl Into<Value<'a>>,
    opts: &Options,
) -> Result<(Vec<u8>, Vec<PatchLogEntry>), EncodeError> {
    let val = encode_with(value, opts)?;
    let mut logger = Logger::new(opts.logging, opts.log_context_window);
    let out = rewrite::rewrite(json, path, &val, &mut logger).unwrap_or_else(|| json.to_vec());
    Ok((out, logger.into_entries()))
}

/// The bytes of the value at `path`, if every segment exists.
pub fn get<'j>(json: &'j [u8], path: &str) -> Option<&'j [u8]> {
    locate::find(json, path)
}

#[cfg(test)]
mod tests;
