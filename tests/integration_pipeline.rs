// tests/integration_pipeline.rs
//! End-to-end runs over a temporary data directory.

use anyhow::Result;
use salesreport_core::config::Config;
use salesreport_core::discovery::sales_files;
use salesreport_core::error::{RecordKind, ReferenceKind, ReportError};
use salesreport_core::pipeline;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// --- Helpers ---

const PRODUCTS: &str = "P001;Manzanas;1200\nP002;Naranjas;800\nP003;Peras;1500\nP004;Bananas;900\n";
const SALESMEN: &str = "CC;111;Juan;Pérez\nCC;112;Ana;López\nCC;113;Luis;García\n";

fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn fixture(sales: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    let data = dir.path().join("data");
    write(&data.join("productos.txt"), PRODUCTS)?;
    write(&data.join("vendedores.txt"), SALESMEN)?;
    fs::create_dir_all(data.join("ventas"))?;
    for (name, content) in sales {
        write(&data.join("ventas").join(name), content)?;
    }
    Ok(dir)
}

fn sample() -> Result<TempDir> {
    fixture(&[
        ("ventas_111.txt", "VENTAS;111\nP001;5;P002;3;P004;2\n"),
        ("ventas_112.txt", "VENTAS;112\nP002;6;P003;4\n"),
        ("ventas_113.txt", "VENTAS;113\nP001;2;P003;1;P004;7\n"),
    ])
}

fn read_report(dir: &TempDir, name: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.path().join("output").join(name))?)
}

// --- Happy path ---

#[test]
fn test_sample_reports() -> Result<()> {
    let dir = sample()?;
    let summary = pipeline::run(&Config::load(dir.path())?)?;

    assert_eq!(summary.sales_files, 3);
    assert_eq!(summary.items_folded, 8);
    assert_eq!(summary.items_skipped, 0);
    assert_eq!(summary.written.len(), 2);

    assert_eq!(
        read_report(&dir, "reporte_vendedores.csv")?,
        "Ana López;10800.00\nJuan Pérez;10200.00\nLuis García;10200.00\n"
    );
    assert_eq!(
        read_report(&dir, "reporte_productos.csv")?,
        "Naranjas;800.00\nBananas;900.00\nManzanas;1200.00\nPeras;1500.00\n"
    );
    Ok(())
}

#[test]
fn test_single_salesman_scenario() -> Result<()> {
    let dir = fixture(&[("ventas_111.txt", "VENTAS;111\nP001;5;P002;3;P004;2\n")])?;
    pipeline::run(&Config::load(dir.path())?)?;
    assert_eq!(read_report(&dir, "reporte_vendedores.csv")?, "Juan Pérez;10200.00\n");
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> Result<()> {
    let dir = sample()?;
    let config = Config::load(dir.path())?;

    pipeline::run(&config)?;
    let first = (
        read_report(&dir, "reporte_vendedores.csv")?,
        read_report(&dir, "reporte_productos.csv")?,
    );
    pipeline::run(&config)?;
    let second = (
        read_report(&dir, "reporte_vendedores.csv")?,
        read_report(&dir, "reporte_productos.csv")?,
    );
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_multiple_body_lines_and_blank_lines() -> Result<()> {
    let dir = fixture(&[("ventas_112.txt", "VENTAS;112\nP002;1\n\nP002;2;P001;1\r\n")])?;
    let summary = pipeline::run(&Config::load(dir.path())?)?;
    assert_eq!(summary.items_folded, 3);
    assert_eq!(read_report(&dir, "reporte_vendedores.csv")?, "Ana López;3600.00\n");
    assert_eq!(
        read_report(&dir, "reporte_productos.csv")?,
        "Naranjas;800.00\nManzanas;1200.00\n"
    );
    Ok(())
}

#[test]
fn test_unknown_product_is_skipped() -> Result<()> {
    let dir = fixture(&[("ventas_111.txt", "VENTAS;111\nP999;10;P001;1\n")])?;
    let summary = pipeline::run(&Config::load(dir.path())?)?;
    assert_eq!(summary.items_skipped, 1);
    assert_eq!(read_report(&dir, "reporte_productos.csv")?, "Manzanas;1200.00\n");
    assert_eq!(read_report(&dir, "reporte_vendedores.csv")?, "Juan Pérez;1200.00\n");
    Ok(())
}

#[test]
fn test_no_sales_files_writes_empty_reports() -> Result<()> {
    let dir = fixture(&[])?;
    pipeline::run(&Config::load(dir.path())?)?;
    assert_eq!(read_report(&dir, "reporte_vendedores.csv")?, "");
    assert_eq!(read_report(&dir, "reporte_productos.csv")?, "");
    Ok(())
}

// --- Discovery ---

#[test]
fn test_discovery_sorted_and_filtered() -> Result<()> {
    let dir = fixture(&[
        ("b.txt", "VENTAS;112\n"),
        ("a.txt", "VENTAS;111\n"),
        ("notes.md", "ignore me"),
    ])?;
    fs::create_dir_all(dir.path().join("data/ventas/nested"))?;
    fs::write(dir.path().join("data/ventas/nested/c.txt"), "VENTAS;113\n")?;

    let files = sales_files(&dir.path().join("data/ventas"), "txt")?;
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
    Ok(())
}

#[test]
fn test_missing_sales_dir_is_io_error() -> Result<()> {
    let dir = fixture(&[])?;
    fs::remove_dir(dir.path().join("data/ventas"))?;
    let err = pipeline::run(&Config::load(dir.path())?).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
    Ok(())
}

// --- Failures leave no reports behind ---

#[test]
fn test_missing_salesman_writes_nothing() -> Result<()> {
    let dir = fixture(&[("ventas_999.txt", "VENTAS;999\nP001;1\n")])?;
    let err = pipeline::run(&Config::load(dir.path())?).unwrap_err();
    assert!(matches!(
        err.root(),
        ReportError::MissingReference { kind: ReferenceKind::Salesman, .. }
    ));
    assert!(!dir.path().join("output/reporte_vendedores.csv").exists());
    assert!(!dir.path().join("output/reporte_productos.csv").exists());
    Ok(())
}

#[test]
fn test_malformed_body_names_file_and_line() -> Result<()> {
    let dir = fixture(&[("ventas_111.txt", "VENTAS;111\nP001;5\nP002;x\n")])?;
    let err = pipeline::run(&Config::load(dir.path())?).unwrap_err();
    assert!(matches!(
        err.root(),
        ReportError::MalformedRecord { kind: RecordKind::SalesBody, .. }
    ));
    let msg = err.to_string();
    assert!(msg.contains("ventas_111.txt:3:"), "{msg}");
    Ok(())
}

#[test]
fn test_malformed_product_names_line() -> Result<()> {
    let dir = fixture(&[])?;
    fs::write(dir.path().join("data/productos.txt"), "P001;Manzanas;1200\nP002;Naranjas\n")?;
    let err = pipeline::run(&Config::load(dir.path())?).unwrap_err();
    assert!(err.to_string().contains("productos.txt:2:"));
    Ok(())
}

#[test]
fn test_failed_run_keeps_previous_reports() -> Result<()> {
    let dir = sample()?;
    let config = Config::load(dir.path())?;
    pipeline::run(&config)?;
    let before = read_report(&dir, "reporte_vendedores.csv")?;

    fs::write(dir.path().join("data/ventas/ventas_114.txt"), "VENTAS;114\nP001;1\n")?;
    assert!(pipeline::run(&config).is_err());

    assert_eq!(read_report(&dir, "reporte_vendedores.csv")?, before);
    let leftovers: Vec<_> = fs::read_dir(dir.path().join("output"))?
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
    Ok(())
}

#[test]
fn test_overflowing_totals_write_nothing() -> Result<()> {
    let dir = fixture(&[("ventas_111.txt", "VENTAS;111\nP001;18446744073709551615;P001;1\n")])?;
    let err = pipeline::run(&Config::load(dir.path())?).unwrap_err();
    assert!(matches!(err.root(), ReportError::Overflow { .. }));
    assert!(!dir.path().join("output/reporte_vendedores.csv").exists());
    assert!(!dir.path().join("output/reporte_productos.csv").exists());
    Ok(())
}
