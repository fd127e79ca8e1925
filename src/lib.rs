//! Character, word and line statistics for text files, with a batch mode
//! that replays many invocations from one script.

pub mod analyze;
pub mod args;
pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod longest;
pub mod report;
pub mod table;
pub mod tally;

use log::info;

pub use args::{Invocation, Section, SectionOrder};
pub use config::{AnalysisConfig, Limits};
pub use error::{ConsoleSink, CounterError, ErrorSink};
pub use table::UniqueItemTable;
pub use tally::CharTally;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Single(Invocation),
    Batch(String),
}

/// Picks single-run or batch mode from the tokens after the program name.
pub fn select_mode<S: AsRef<str>>(tokens: &[S]) -> Result<Mode, CounterError> {
    if tokens.len() < 2 {
        return Err(CounterError::Usage);
    }
    if tokens[0].as_ref() == "-B" {
        return Ok(Mode::Batch(tokens[1].as_ref().to_string()));
    }
    args::parse_invocation(tokens).map(Mode::Single)
}

/// Runs whatever the tokens describe. Errors that end the run are returned
/// unreported; batch lines report their own through `sink`.
pub async fn run<S: AsRef<str>>(
    tokens: &[S],
    config: &AnalysisConfig,
    sink: &dyn ErrorSink,
) -> Result<(), CounterError> {
    match select_mode(tokens)? {
        Mode::Single(invocation) => analyze::analyze(&invocation, config).await,
        Mode::Batch(path) => {
            info!("Running batch file: {}", path);
            batch::run_batch(&path, config, sink).await.map(|_| ())
        }
    }
}
