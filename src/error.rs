// src/error.rs
use std::io::{self, Write};
use std::sync::Mutex;

use thiserror::Error;

pub const USAGE: &str = "USAGE:\n\t./madcounter -f <input file> -o <output file> -c -w -l -Lw -Ll\n\t\tOR\n\t./madcounter -B <batch file>";

/// Everything that can stop an invocation. The `Display` text is the
/// message shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CounterError {
    #[error("{}", USAGE)]
    Usage,
    #[error("ERROR: Invalid Flag Types")]
    InvalidFlag,
    #[error("ERROR: Can't open batch file")]
    BatchOpen,
    #[error("ERROR: Batch File Empty")]
    BatchEmpty,
    #[error("ERROR: No Input File Provided")]
    NoInputFile,
    #[error("ERROR: Can't open input file")]
    InputOpen,
    #[error("ERROR: No Output File Provided")]
    NoOutputFile,
    #[error("ERROR: Input File Empty")]
    InputEmpty,
    #[error("ERROR: Can't open output file")]
    OutputOpen,
    #[error("ERROR: Memory allocation failed")]
    OutOfMemory,
}

impl CounterError {
    /// Fatal errors end the whole process, not just the current invocation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CounterError::OutOfMemory)
    }
}

/// Destination for user-facing error messages.
pub trait ErrorSink {
    fn report(&self, error: &CounterError);
}

/// Prints messages on stdout, where the reports also go. A closed stdout is
/// ignored rather than turned into a panic.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn write_to<W: Write>(mut out: W, error: &CounterError) -> io::Result<()> {
        writeln!(out, "{}", error)?;
        out.flush()
    }
}

impl ErrorSink for ConsoleSink {
    fn report(&self, error: &CounterError) {
        let _ = Self::write_to(io::stdout().lock(), error);
    }
}

/// Keeps every reported error, in order.
#[derive(Debug, Default)]
pub struct CaptureSink {
    errors: Mutex<Vec<CounterError>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<CounterError> {
        self.errors
            .lock()
            .map(|errors| errors.clone())
            .unwrap_or_default()
    }
}

impl ErrorSink for CaptureSink {
    fn report(&self, error: &CounterError) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(*error);
        }
    }
}
