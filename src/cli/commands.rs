use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::models::Report;
use crate::report::build_report;
use crate::summarizer::DEFAULT_MAX_CHARS;
use crate::utils::expand_tilde;

#[derive(Parser, Debug)]
#[command(name = "chat-history-summarizer")]
#[command(version = "0.1.0")]
#[command(about = "Summarize chat history JSONL into compact, structured JSON", long_about = None)]
pub struct Cli {
    /// Path to a JSONL file or a directory to list JSONL files from
    pub path: PathBuf,

    /// Max characters to keep for long fields
    #[arg(long, default_value_t = DEFAULT_MAX_CHARS)]
    pub max_chars: usize,

    /// Print the report on a single line instead of indented
    #[arg(long)]
    pub compact: bool,

    /// Log debug diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "chat_history_summarizer=debug"
        } else {
            "chat_history_summarizer=warn"
        })
    });
    // A global subscriber may already be installed when embedded or under test
    if let Err(e) =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init()
    {
        debug!("Keeping existing tracing subscriber: {e}");
    }
}

/// Build the report for `cli.path` and write it to `out`
///
/// A missing path is not an error: its report is written and the exit code is
/// a failure. Line-level parse errors still exit successfully.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<ExitCode> {
    let path = expand_tilde(&cli.path);
    let report = build_report(&path, cli.max_chars)?;

    render_report(&report, cli.compact, out)?;

    if report.is_failure() { Ok(ExitCode::FAILURE) } else { Ok(ExitCode::SUCCESS) }
}

/// Write `report` as JSON followed by a newline
///
/// The not-found report is always a single line.
pub fn render_report<W: Write>(report: &Report, compact: bool, out: &mut W) -> Result<()> {
    let written = if compact || report.is_failure() {
        serde_json::to_writer(&mut *out, report)
    } else {
        serde_json::to_writer_pretty(&mut *out, report)
    };
    written.context("Failed to serialize report")?;

    writeln!(out).context("Failed to write report")?;
    Ok(())
}
