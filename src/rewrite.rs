use crate::emit::{Emitter, SliceEmitter};
use crate::locate::{Location, locate};
use crate::scanner::{prev_significant, value_len};

/// Result of applying a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The path did not resolve; the document is untouched.
    Unchanged,
    /// The value was overwritten in the existing storage. Length is
    /// preserved and any freed tail is padded with spaces.
    InPlace,
    /// The document was rebuilt around the new value.
    Spliced,
}

impl Outcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
    pub path: Option<String>,
}

#[derive(Default)]
pub(crate) struct Logger {
    enable: bool,
    window: usize,
    entries: Vec<PatchLogEntry>,
}

impl Logger {
    pub(crate) fn new(enable: bool, window: usize) -> Self {
        Self { enable, window, entries: Vec::new() }
    }

    pub(crate) fn disabled() -> Self {
        Self::default()
    }

    #[inline]
    fn log(&mut self, json: &[u8], position: usize, message: &'static str, path: &str) {
        if !self.enable {
            return;
        }
        let lo = position.saturating_sub(self.window);
        let hi = position.saturating_add(self.window).min(json.len());
        let context = String::from_utf8_lossy(json.get(lo..hi).unwrap_or_default()).into_owned();
        self.entries.push(PatchLogEntry {
            position,
            message,
            context,
            path: Some(path.to_string()),
        });
    }

    pub(crate) fn into_entries(self) -> Vec<PatchLogEntry> {
        self.entries
    }
}

/// What the terminal accessor of a path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target<'p> {
    /// Empty path: the whole document is replaced.
    Document,
    /// An existing value spanning `start..end`.
    Replace { start: usize, end: usize },
    /// A missing key; insert before the `}` at `at`.
    AppendKey { at: usize, key: &'p str, first: bool },
    /// Index equal to the array length; insert before the `]` at `at`.
    AppendElem { at: usize, first: bool },
    /// `null` at `at` addressed with index 0; becomes a one-element array.
    PromoteNull { at: usize },
}

impl Target<'_> {
    /// Byte span of the document that the new value takes the place of.
    fn span(&self, len: usize) -> (usize, usize) {
        match *self {
            Target::Document => (0, len),
            Target::Replace { start, end } => (start, end),
            Target::AppendKey { at, .. } | Target::AppendElem { at, .. } => (at, at),
            Target::PromoteNull { at } => (at, at + 4),
        }
    }
}

/// Walk `path` through `json`. Returns `None` when the path is malformed:
/// a segment is not found, or a segment other than the last resolves to an
/// append point.
pub(crate) fn resolve<'p>(json: &[u8], path: &'p str, logger: &mut Logger) -> Option<Target<'p>> {
    if path.is_empty() {
        logger.log(json, 0, "replaced document", path);
        return Some(Target::Document);
    }

    let mut cursor = 0usize;
    let mut seg_start = 0usize;
    let mut segments = path.split('.').peekable();
    while let Some(acc) = segments.next() {
        let terminal = segments.peek().is_none();
        let prefix = &path[..seg_start + acc.len()];
        seg_start += acc.len() + 1;

        match locate(&json[cursor..], acc) {
            Location::Found(off) => {
                cursor += off;
                if terminal {
                    let end = cursor + value_len(&json[cursor..]);
                    logger.log(json, cursor, "replaced value", prefix);
                    return Some(Target::Replace { start: cursor, end });
                }
                logger.log(json, cursor, "resolved accessor", prefix);
            }
            Location::Append(off) if terminal => {
                let at = cursor + off;
                return Some(if json[at] == b'}' {
                    logger.log(json, at, "appended object key", prefix);
                    let first = prev_significant(json, at) == Some(b'{');
                    Target::AppendKey { at, key: acc, first }
                } else {
                    logger.log(json, at, "appended array element", prefix);
                    let first = prev_significant(json, at) == Some(b'[');
                    Target::AppendElem { at, first }
                });
            }
            Location::NullAppend(off) if terminal => {
                let at = cursor + off;
                logger.log(json, at, "promoted null to array", prefix);
                return Some(Target::PromoteNull { at });
            }
            Location::Append(off) => {
                logger.log(json, cursor + off, "append point before terminal accessor", prefix);
                return None;
            }
            Location::NullAppend(off) => {
                logger.log(json, cursor + off, "null promotion before terminal accessor", prefix);
                return None;
            }
            Location::NotFound => {
                logger.log(json, cursor, "accessor not found", prefix);
                return None;
            }
        }
    }
    None
}

/// Build a new buffer: prefix, the new value (with any key, comma or
/// brackets it needs), suffix.
pub(crate) fn splice(json: &[u8], target: Target<'_>, val: &[u8]) -> Vec<u8> {
    if let Target::Document = target {
        return val.to_vec();
    }
    let (start, end) = target.span(json.len());
    let mut out = Vec::with_capacity(json.len() + val.len() + 8);
    out.emit_bytes(&json[..start]);
    match target {
        Target::AppendKey { key, first, .. } => {
            if !first {
                out.emit_byte(b',');
            }
            out.emit_byte(b'"');
            out.emit_str(key);
            out.emit_bytes(b"\":");
            out.emit_bytes(val);
        }
        Target::AppendElem { first, .. } => {
            if !first {
                out.emit_byte(b',');
            }
            out.emit_bytes(val);
        }
        Target::PromoteNull { .. } => {
            out.emit_byte(b'[');
            out.emit_bytes(val);
            out.emit_byte(b']');
        }
        Target::Document | Target::Replace { .. } => out.emit_bytes(val),
    }
    out.emit_bytes(&json[end..]);
    out
}

/// Overwrite the target in place when the new text is no longer than the old
/// span, padding the rest with spaces. Appends never fit. Returns whether the
/// buffer was written.
pub(crate) fn overwrite(json: &mut [u8], target: Target<'_>, val: &[u8]) -> bool {
    let bracket = match target {
        Target::Replace { .. } => false,
        Target::PromoteNull { .. } => true,
        _ => return false,
    };
    let (start, end) = target.span(json.len());
    let needed = val.len() + if bracket { 2 } else { 0 };
    if needed > end - start {
        return false;
    }
    let Some(window) = json.get_mut(start..end) else {
        return false;
    };
    let mut out = SliceEmitter::new(window);
    if bracket {
        out.emit_byte(b'[');
    }
    out.emit_bytes(val);
    if bracket {
        out.emit_byte(b']');
    }
    debug_assert!(!out.overflowed());
    let written = out.written();
    window[written..].fill(b' ');
    true
}

/// Allocating rewrite. `None` when the path is malformed.
pub(crate) fn rewrite(json: &[u8], path: &str, val: &[u8], logger: &mut Logger) -> Option<Vec<u8>> {
    let target = resolve(json, path, logger)?;
    Some(splice(json, target, val))
}

/// In-place rewrite. Falls back to a fresh buffer when the value does not fit.
pub(crate) fn rewrite_in_place(
    json: &mut Vec<u8>,
    path: &str,
    val: &[u8],
    logger: &mut Logger,
) -> Outcome {
    let Some(target) = resolve(json, path, logger) else {
        return Outcome::Unchanged;
    };
    if let Target::Document = target {
        json.clear();
        json.extend_from_slice(val);
        return Outcome::Spliced;
    }
    if overwrite(json, target, val) {
        return Outcome::InPlace;
    }
    *json = splice(json, target, val);
    Outcome::Spliced
}
