//! glossa - A CLI viewer for static glossary/lexicon JSON documents
//!
//! glossa provides:
//! - Tolerant normalization of heterogeneous lexicon documents
//! - Natural ordering of structured ids (6, 6c, 32a2, 1.1)
//! - Substring filtering, facets and ranked search
//! - Unified output format (jsonl/json/md/raw)

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod core;
mod lexicon;
mod source;
mod view;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(&cli);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &cli::Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,glossa=debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.no_color),
        )
        .init();
}
