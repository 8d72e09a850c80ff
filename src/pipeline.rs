// src/pipeline.rs
//! The batch run: load reference data, fold every sales file, render and persist.

use crate::aggregate::Aggregates;
use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::loader;
use crate::report;
use crate::types::{ProductMap, Reports, SalesFile, SalesmanMap};
use crate::writer::{self, ReportFile};
use std::path::PathBuf;

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub sales_files: usize,
    pub items_folded: usize,
    pub items_skipped: usize,
}

/// Aggregated totals plus the counts gathered while folding.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub aggregates: Aggregates,
    pub reports: Reports,
    pub sales_files: usize,
    pub items_folded: usize,
    pub items_skipped: usize,
}

/// Runs the whole batch described by `config`.
///
/// Both reports are rendered before anything is written.
///
/// # Errors
/// Returns the first I/O, malformed-record or missing-reference error.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;
    tracing::info!(data_dir = %config.data_dir().display(), "starting report run");

    let products = loader::read_products(&config.products_path())?;
    let salesmen = loader::read_salesmen(&config.salesmen_path())?;

    let paths = discovery::sales_files(&config.sales_dir(), &config.input.sales_extension)?;
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        files.push(loader::read_sales_file(path)?);
    }

    let outcome = build_reports(&products, &salesmen, &files)?;

    let output_dir = config.output_dir();
    let written = writer::write_reports(
        &output_dir,
        &[
            ReportFile {
                name: &config.output.salesmen_report,
                lines: &outcome.reports.salesmen,
            },
            ReportFile {
                name: &config.output.products_report,
                lines: &outcome.reports.products,
            },
        ],
    )?;

    tracing::info!(
        files = outcome.sales_files,
        folded = outcome.items_folded,
        skipped = outcome.items_skipped,
        "report run complete"
    );

    Ok(RunSummary {
        output_dir,
        written,
        sales_files: outcome.sales_files,
        items_folded: outcome.items_folded,
        items_skipped: outcome.items_skipped,
    })
}

/// Folds `files` in order and renders both reports. Performs no I/O.
///
/// # Errors
/// Returns `Overflow` if a total no longer fits, or `MissingReference` if an
/// aggregate key has no reference entity.
pub fn build_reports(
    products: &ProductMap,
    salesmen: &SalesmanMap,
    files: &[SalesFile],
) -> Result<Outcome> {
    let mut outcome = Outcome::default();

    for file in files {
        let stats = outcome
            .aggregates
            .fold(products, &file.salesman_doc, &file.items)?;
        tracing::debug!(
            file = %file.name,
            salesman = %file.salesman_doc,
            folded = stats.folded,
            skipped = stats.skipped,
            "folded sales file"
        );
        outcome.sales_files += 1;
        outcome.items_folded += stats.folded;
        outcome.items_skipped += stats.skipped;
    }

    outcome.reports = Reports {
        salesmen: report::salesman_report(&outcome.aggregates.salesman_money, salesmen)?,
        products: report::product_report(&outcome.aggregates.product_qty, products)?,
    };
    Ok(outcome)
}
