// src/batch.rs
use log::{debug, info};
use tokio::fs;

use crate::analyze::analyze;
use crate::args::{parse_invocation, split_batch_line};
use crate::config::AnalysisConfig;
use crate::error::{CounterError, ErrorSink};

/// Fewest tokens a batch line needs before it is treated as a command.
const MIN_BATCH_TOKENS: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Replays every non-empty line of `path` as an independent invocation.
///
/// Per-line errors go to `sink` and the loop moves on. Only problems with the
/// batch file itself, or a fatal error, are returned.
pub async fn run_batch(
    path: &str,
    config: &AnalysisConfig,
    sink: &dyn ErrorSink,
) -> Result<BatchSummary, CounterError> {
    let contents = fs::read(path).await.map_err(|e| {
        debug!("open batch '{}': {}", path, e);
        CounterError::BatchOpen
    })?;
    if contents.is_empty() {
        return Err(CounterError::BatchEmpty);
    }

    let mut summary = BatchSummary::default();
    for (number, raw) in contents.split(|&b| b == b'\n').enumerate() {
        if raw.is_empty() {
            continue;
        }
        let line = String::from_utf8_lossy(raw);
        let tokens = split_batch_line(&line);
        if tokens.len() < MIN_BATCH_TOKENS {
            debug!("batch line {}: too few tokens, skipping", number + 1);
            summary.skipped += 1;
            continue;
        }

        let outcome = match parse_invocation(&tokens) {
            Ok(invocation) => analyze(&invocation, config).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => summary.succeeded += 1,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                debug!("batch line {}: {:?}", number + 1, e);
                sink.report(&e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "Batch {} done: {} ok, {} failed, {} skipped",
        path, summary.succeeded, summary.failed, summary.skipped
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaptureSink;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_batch_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("batch.txt");
        let sink = CaptureSink::new();
        let err = run_batch(path.to_str().unwrap(), &AnalysisConfig::default(), &sink)
            .await
            .unwrap_err();
        assert_eq!(err, CounterError::BatchOpen);
        assert!(sink.errors().is_empty());
    }

    #[tokio::test]
    async fn empty_batch_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("batch.txt");
        std::fs::write(&path, "").unwrap();
        let sink = CaptureSink::new();
        let err = run_batch(path.to_str().unwrap(), &AnalysisConfig::default(), &sink)
            .await
            .unwrap_err();
        assert_eq!(err, CounterError::BatchEmpty);
    }

    #[tokio::test]
    async fn bad_line_does_not_stop_the_rest() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "a bb a").unwrap();
        let out = dir.path().join("out.txt");
        let batch = dir.path().join("batch.txt");
        std::fs::write(
            &batch,
            format!(
                "-f {} -x\n\n-c\n-f {} -o {} -w\n-f {}/nope.txt -c\n",
                input.display(),
                input.display(),
                out.display(),
                dir.path().display()
            ),
        )
        .unwrap();

        let sink = CaptureSink::new();
        let summary = run_batch(batch.to_str().unwrap(), &AnalysisConfig::default(), &sink)
            .await
            .unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                succeeded: 1,
                failed: 2,
                skipped: 1
            }
        );
        assert_eq!(
            sink.errors(),
            vec![CounterError::InvalidFlag, CounterError::InputOpen]
        );
        let report = std::fs::read_to_string(&out).unwrap();
        assert!(report.starts_with("Total Number of Words: 3\nTotal Unique Words: 2\n"));
    }
}
