mod cli;

use crate::cli::{Command, DecodeArgs, EncodeArgs, RewriteArgs, CLI};
use anyhow::Context;
use clap::Parser;
use cloak_core::TokenPrefix;
use cloak_rewriter::{process_directory, BatchOptions, FailurePolicy};
use std::process::ExitCode;
use tracing::{info, warn};

/// Exit status when the batch finished but some playlists were skipped.
const EXIT_PARTIAL: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = CLI::parse();

    cloak_telemetry::init(cli.log_format, "info")?;

    match cli.command {
        Command::Rewrite(args) => rewrite(args),
        Command::Encode(args) => encode(args),
        Command::Decode(args) => decode(args),
    }
}

fn rewrite(args: RewriteArgs) -> anyhow::Result<ExitCode> {
    let policy = if args.fail_fast {
        FailurePolicy::AbortOnError
    } else {
        FailurePolicy::SkipAndContinue
    };

    let options = BatchOptions::builder()
        .input_dir(args.input_dir)
        .output_dir(args.output_dir)
        .prefix(args.prefix.prefix)
        .policy(policy)
        .build();

    info!(
        input_dir = %options.input_dir.display(),
        output_dir = %options.output_dir.display(),
        prefix = %options.prefix,
        ?policy,
        "starting playlist rewrite"
    );

    let report = process_directory(&options).context("playlist rewrite failed")?;

    if args.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "playlist rewrite finished"
    );

    if report.has_failures() {
        warn!(failed = report.failed.len(), "some playlists were skipped");
        return Ok(ExitCode::from(EXIT_PARTIAL));
    }

    Ok(ExitCode::SUCCESS)
}

fn encode(args: EncodeArgs) -> anyhow::Result<ExitCode> {
    let prefix = TokenPrefix::new(args.prefix.prefix);
    println!("{}", prefix.tokenize(&args.url));
    Ok(ExitCode::SUCCESS)
}

fn decode(args: DecodeArgs) -> anyhow::Result<ExitCode> {
    let prefix = TokenPrefix::new(args.prefix.prefix);
    let url = prefix
        .resolve(&args.token)
        .with_context(|| format!("cannot resolve token with prefix '{prefix}'"))?;
    println!("{url}");
    Ok(ExitCode::SUCCESS)
}
