//! stopword_sync - bring the Stopwords table up to date with the standard
//! Thai stopword corpus.
//!
//! Usage:
//!   stopword_sync                         # one bulk insert
//!   stopword_sync --daily                 # chunks of --daily-limit (default 100)
//!   stopword_sync --batch-size 50 --json  # explicit chunks, JSON report
//!   stopword_sync --dry-run --export nonstandard.json
//!
//! Connection settings come from DATABASE_URL or DB_HOST / DB_PORT /
//! DB_USER / DB_PASSWORD / DB_NAME (a `.env` file is honoured).

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use thai_lexicon_core::{
    run_sync, CorpusSource, EmbeddedCorpus, FileCorpus, LoadedCorpus, RemovedReportFile,
    RunReport,
};
use thai_lexicon_mysql::{MySqlConfig, MySqlStopwordStore};

use crate::cli::Args;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args).await {
        Ok(report) => {
            if let Err(e) = print_report(&report, args.json) {
                eprintln!("{} {:#}", "ERROR:".red().bold(), e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", "ERROR:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<RunReport> {
    let source: Box<dyn CorpusSource> = match &args.corpus_file {
        Some(path) => Box::new(FileCorpus::new(path)),
        None => Box::new(EmbeddedCorpus::new()),
    };
    // An unavailable corpus stops the run before the store is touched.
    let corpus = LoadedCorpus::fetch(source.as_ref()).await?;

    let removed_report = RemovedReportFile::new(&args.removed_report);
    let options = args.sync_options();
    match options.batch_size {
        Some(size) => tracing::info!("Inserting in chunks of at most {} rows", size),
        None => tracing::info!("Inserting in a single bulk transaction"),
    }

    let pool = MySqlConfig::from_env().connect().await?;
    let store = MySqlStopwordStore::new(pool.clone());

    let result = run_sync(&corpus, &store, &removed_report, &options).await;

    // Released on every path, including failed runs.
    pool.close().await;
    tracing::debug!("Database connection closed");

    result.context("stopword sync failed")
}

fn print_report(report: &RunReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let status = if report.dry_run {
        "DRY RUN".yellow().bold()
    } else {
        "OK".green().bold()
    };
    println!("{} {}", status, report);
    Ok(())
}
