//! `license-vetter`: report the license evaluations that need manual IP review.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and install logging ([`logging`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Read evaluated records ([`input::read_records`]).
//! 4. Feed them to the chosen collector ([`collector`]): a plain-text summary,
//!    or drafted review requests ([`review::markdown`]).
//! 5. Exit with the number of records needing review, clamped to `0..=255`.

mod cli;
mod collector;
mod config;
mod input;
mod logging;
mod models;
mod report;
mod review;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use collector::{CollectorError, ResultSink, ReviewRequestCollector, SummaryCollector};
use config::{load_config, CollectorKind};
use models::LicenseRecord;
use review::markdown::MarkdownReviewService;

/// Largest status a process can report on every supported host.
const MAX_EXIT_CODE: usize = 255;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    let records = input::read_records(&cli.input, cli.format)?;
    let flagged = records.iter().filter(|r| r.needs_review()).count();

    if !cli.quiet {
        eprintln!(
            "  {} read {} records, {} need review",
            "→".cyan(),
            records.len(),
            flagged
        );
    }
    if cli.verbose {
        report::terminal::render_breakdown(&records);
    }

    let kind = cli.collector.unwrap_or(config.report.collector);
    tracing::debug!(?kind, "selected collector");

    let service = MarkdownReviewService::new(&config.review);

    let (outcome, status) = {
        let mut file: BufWriter<File>;
        let mut stdout: io::StdoutLock<'static>;
        let output: &mut dyn Write = match &cli.output {
            Some(path) => {
                file = BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?,
                );
                &mut file
            }
            None => {
                stdout = io::stdout().lock();
                &mut stdout
            }
        };

        let mut sink: Box<dyn ResultSink + '_> = match kind {
            CollectorKind::Summary => Box::new(SummaryCollector::new(output)),
            CollectorKind::Review => Box::new(ReviewRequestCollector::new(&service, output)),
        };
        let outcome = drive(sink.as_mut(), records);
        (outcome, sink.status())
    };

    let code = match outcome {
        Ok(()) => exit_code(status),
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), failure_message(err));
            exit_code(status).max(1)
        }
    };

    std::process::exit(code);
}

/// Accept every record, then close. The upstream side of the collector contract.
fn drive(sink: &mut dyn ResultSink, records: Vec<LicenseRecord>) -> Result<(), CollectorError> {
    for record in records {
        sink.accept(record)?;
    }
    sink.close()
}

/// Render the error chain, then name any records the service did not submit.
fn failure_message(err: CollectorError) -> String {
    let unsubmitted = match &err {
        CollectorError::Service(source) => source.unsubmitted().join(", "),
        _ => String::new(),
    };
    let mut message = format!("{:#}", anyhow::Error::from(err));
    if !unsubmitted.is_empty() {
        message.push_str("\n  not submitted: ");
        message.push_str(&unsubmitted);
    }
    message
}

fn exit_code(status: usize) -> i32 {
    status.min(MAX_EXIT_CODE) as i32
}
