// src/main.rs
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error};

use madcounter::{AnalysisConfig, ConsoleSink, CounterError, ErrorSink, logging};

#[derive(Parser)]
#[command(name = "madcounter")]
#[command(about = "Reports character, word and line statistics for text files.", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// `-f <input> [-o <output>] [-c] [-w] [-l] [-Lw] [-Ll]` or `-B <batch file>`
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    tokens: Vec<String>,
}

/// Puts an end-of-options marker in front of the user's tokens so clap hands
/// every one of them, a leading `--` included, to the validator.
fn escaped_args<I>(user_args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    std::iter::once(OsString::from("madcounter"))
        .chain([OsString::from("--")])
        .chain(user_args)
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    logging::init();
    let sink = ConsoleSink;

    let cli = match Cli::try_parse_from(escaped_args(std::env::args_os().skip(1))) {
        Ok(cli) => cli,
        Err(e) => {
            debug!("argument capture failed: {}", e);
            sink.report(&CounterError::Usage);
            return Ok(ExitCode::FAILURE);
        }
    };

    let status = match madcounter::run(&cli.tokens, &AnalysisConfig::default(), &sink).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_fatal() {
                error!("aborting: {:?}", e);
            }
            sink.report(&e);
            ExitCode::FAILURE
        }
    };

    std::io::stdout().flush().context("Failed to flush stdout")?;
    Ok(status)
}
