#[derive(Clone, Debug)]
pub struct Options {
    /// When true, escape non-ASCII characters in encoded strings as \uXXXX.
    pub ensure_ascii: bool,
    /// Enable patch logging. Use `set_with_log` to retrieve logs.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many bytes are captured on both sides of the position.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ensure_ascii: false,
            logging: false,
            log_context_window: 10,
        }
    }
}
