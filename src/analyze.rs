// src/analyze.rs
use log::{debug, error, info, warn};
use tokio::fs::File;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

use crate::args::{Invocation, Section, SectionOrder};
use crate::config::{AnalysisConfig, Limits};
use crate::error::CounterError;
use crate::extract::{build_line_table, build_word_table};
use crate::report::{AnalysisData, CharSection, render};
use crate::success;
use crate::tally::tally;

/// Builds only the structures the requested sections need.
///
/// `file_len` is the size reported by the filesystem and ends up in the
/// character section header.
pub fn build_analysis(
    bytes: &[u8],
    file_len: u64,
    order: &SectionOrder,
    limits: &Limits,
) -> AnalysisData {
    let chars = order.contains(Section::Chars).then(|| {
        let tally = tally(bytes);
        if tally.total() as u64 != file_len {
            warn!(
                "file length {} differs from {} bytes scanned",
                file_len,
                tally.total()
            );
        }
        CharSection {
            tally,
            total: file_len,
        }
    });
    let words = order
        .needs_words()
        .then(|| build_word_table(bytes, limits));
    let lines = order
        .needs_lines()
        .then(|| build_line_table(bytes, limits));

    AnalysisData {
        chars,
        words,
        lines,
    }
}

/// Opens the input, rejects an empty one and reads it whole.
pub async fn read_input(path: &str) -> Result<(Vec<u8>, u64), CounterError> {
    let mut file = File::open(path).await.map_err(|e| {
        debug!("open '{}': {}", path, e);
        CounterError::InputOpen
    })?;
    let len = file
        .metadata()
        .await
        .map_err(|_| CounterError::InputOpen)?
        .len();
    if len == 0 {
        return Err(CounterError::InputEmpty);
    }

    let mut bytes = Vec::new();
    let capacity = usize::try_from(len).map_err(|_| CounterError::OutOfMemory)?;
    bytes
        .try_reserve_exact(capacity)
        .map_err(|_| CounterError::OutOfMemory)?;
    file.read_to_end(&mut bytes).await.map_err(|e| {
        debug!("read '{}': {}", path, e);
        CounterError::InputOpen
    })?;
    Ok((bytes, len))
}

/// Creates or truncates the output file, if one was named.
async fn open_output(output: Option<&str>) -> Result<Option<File>, CounterError> {
    match output {
        Some(path) => File::create(path).await.map(Some).map_err(|e| {
            debug!("create '{}': {}", path, e);
            CounterError::OutputOpen
        }),
        None => Ok(None),
    }
}

async fn write_report(output: Option<File>, report: &[u8]) -> Result<(), CounterError> {
    match output {
        Some(mut file) => {
            file.write_all(report).await.map_err(|e| {
                error!("writing report: {}", e);
                CounterError::OutputOpen
            })?;
            file.flush().await.map_err(|_| CounterError::OutputOpen)
        }
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(report)
                .await
                .map_err(|_| CounterError::OutputOpen)?;
            stdout.flush().await.map_err(|_| CounterError::OutputOpen)
        }
    }
}

/// Runs one invocation end to end: read, build, render, write.
///
/// The output is only touched once the input has been opened and found
/// non-empty.
pub async fn analyze(invocation: &Invocation, config: &AnalysisConfig) -> Result<(), CounterError> {
    info!("Analyzing file: {}", invocation.input);
    let (bytes, file_len) = read_input(&invocation.input).await?;
    let output = open_output(invocation.output.as_deref()).await?;

    let data = build_analysis(&bytes, file_len, &invocation.sections, &config.limits);
    let report = render(&invocation.sections, &data).map_err(|_| CounterError::OutputOpen)?;
    write_report(output, &report).await?;

    success!(
        "Report for {} written to {}",
        invocation.input,
        invocation.output.as_deref().unwrap_or("stdout")
    );
    Ok(())
}
