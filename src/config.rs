// src/config.rs

/// Longest word kept, in bytes. Longer words are truncated.
pub const DEFAULT_MAX_WORD_LEN: usize = 999;

/// Longest line kept, in bytes. Longer lines are truncated.
pub const DEFAULT_MAX_LINE_LEN: usize = 9999;

/// Upper bounds applied while extracting words and lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_word_len: usize,
    pub max_line_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

/// Settings for one `analyze` invocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalysisConfig {
    pub limits: Limits,
}
