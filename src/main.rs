mod args;
mod dump;

use args::{Cli, Commands, GroupSel};
use clap::Parser;
use gcm_vectors::{Group, Outcome, Report, RunOptions, RustCryptoGcm};

use std::io::{self, Write};
use std::time::Instant;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{failed} of {total} cases failed verification")]
    VerificationFailed { failed: usize, total: usize },

    #[error(transparent)]
    Vectors(#[from] gcm_vectors::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    if let Err(e) = gcmvec(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn groups(sel: GroupSel) -> &'static [Group] {
    match sel {
        GroupSel::Passing => &[Group::Passing],
        GroupSel::Failing => &[Group::Failing],
        GroupSel::DecryptionFailing => &[Group::DecryptionFailing],
        GroupSel::All => &Group::ALL,
    }
}

fn gcmvec(args: Cli) -> Result<(), CliError> {
    match args.command {
        Commands::List(sel) => {
            let vectors = gcm_vectors::test_vectors::<()>();
            let out = io::stdout().lock();
            dump::list(out, &vectors, groups(sel.group))
        }
        Commands::Dump(dump) => {
            let vectors = gcm_vectors::test_vectors::<()>();
            let out = io::stdout().lock();
            dump::write(out, &vectors, groups(dump.select.group), dump.format)
        }
        Commands::Verify(verify) => {
            let mut vectors = gcm_vectors::test_vectors();
            vectors.hydrate(&RustCryptoGcm)?;

            let options = RunOptions {
                check_decrypt: !verify.skip_decrypt,
            };

            let start = Instant::now();
            let report = gcm_vectors::run(&RustCryptoGcm, &vectors, &options);
            let duration = start.elapsed();

            summarize(io::stdout().lock(), &report, duration.as_millis())
        }
    }
}

/// Prints failed cases and a summary line. Fails if any case did not pass.
fn summarize<W: Write>(mut out: W, report: &Report, millis: u128) -> Result<(), CliError> {
    for case in report.failures() {
        if let Outcome::Failed { reason } = &case.outcome {
            writeln!(out, "FAIL [{}] {}: {}", case.group, case.name, reason)?;
        }
    }
    writeln!(
        out,
        "Verified {} of {} cases in {} ms",
        report.passed, report.total, millis
    )?;

    if report.all_passed() {
        Ok(())
    } else {
        Err(CliError::VerificationFailed {
            failed: report.failed,
            total: report.total,
        })
    }
}
