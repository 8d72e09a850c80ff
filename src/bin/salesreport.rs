// src/bin/salesreport.rs
use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use salesreport_core::cli::Cli;
use salesreport_core::exit::ReportExit;
use salesreport_core::logging;
use salesreport_core::pipeline::{self, RunSummary};

fn main() -> ReportExit {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => {
            print_summary(&summary);
            ReportExit::Success
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ReportExit::for_error(&e)
        }
    }
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let base = env::current_dir().context("Failed to resolve working directory")?;
    let config = cli.resolve(&base)?;
    logging::init(config.verbose);
    Ok(pipeline::run(&config)?)
}

fn print_summary(summary: &RunSummary) {
    println!(
        "{} {}",
        "✅ Reports written to".green().bold(),
        summary.output_dir.display()
    );
    if summary.items_skipped > 0 {
        println!(
            "{}",
            format!(
                "   {} sale item(s) referenced unknown products and were skipped",
                summary.items_skipped
            )
            .yellow()
        );
    }
}
