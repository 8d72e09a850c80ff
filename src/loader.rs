// src/loader.rs
//! Reads the input files into entity maps and sales files.

use crate::error::{RecordKind, ReportError, Result};
use crate::parser;
use crate::types::{ProductMap, SalesFile, SalesmanMap};
use std::fs;
use std::path::Path;

/// Loads `ID;Name;Price` records keyed by product id.
///
/// Blank lines are ignored. A repeated id replaces the earlier record.
///
/// # Errors
/// Returns error if the file cannot be read or a line is malformed.
pub fn read_products(path: &Path) -> Result<ProductMap> {
    let content = read_text(path)?;
    let mut map = ProductMap::new();
    for (row, line) in records(&content) {
        let product = parser::parse_product_line(line).map_err(|e| e.at_line(path, row))?;
        if map.contains_key(&product.id) {
            tracing::warn!(id = %product.id, path = %path.display(), row, "duplicate product id, keeping the later record");
        }
        map.insert(product.id.clone(), product);
    }
    tracing::debug!(path = %path.display(), count = map.len(), "loaded products");
    Ok(map)
}

/// Loads `DocType;DocNumber;FirstName;LastName` records keyed by document number.
///
/// Blank lines are ignored. A repeated document number replaces the earlier record.
///
/// # Errors
/// Returns error if the file cannot be read or a line is malformed.
pub fn read_salesmen(path: &Path) -> Result<SalesmanMap> {
    let content = read_text(path)?;
    let mut map = SalesmanMap::new();
    for (row, line) in records(&content) {
        let salesman = parser::parse_salesman_line(line).map_err(|e| e.at_line(path, row))?;
        if map.contains_key(&salesman.doc_number) {
            tracing::warn!(doc = %salesman.doc_number, path = %path.display(), row, "duplicate salesman document, keeping the later record");
        }
        map.insert(salesman.doc_number.clone(), salesman);
    }
    tracing::debug!(path = %path.display(), count = map.len(), "loaded salesmen");
    Ok(map)
}

/// Reads one sales file: a `Tag;DocNumber` header followed by body lines.
///
/// # Errors
/// Returns error if the file cannot be read, has no header, or a line is malformed.
pub fn read_sales_file(path: &Path) -> Result<SalesFile> {
    let content = read_text(path)?;
    parse_sales_file(&file_name(path), &content).map_err(|e| match e {
        ReportError::AtLine { row, source, .. } => (*source).at_line(path, row),
        other => other.at_line(path, 1),
    })
}

/// Parses the full text of a sales file. Errors carry `name` and the line number.
///
/// # Errors
/// Returns `MalformedRecord` if the header is missing or any line is malformed.
pub fn parse_sales_file(name: &str, content: &str) -> Result<SalesFile> {
    let mut lines = content.lines().enumerate();
    let header = lines
        .next()
        .map(|(_, line)| line)
        .ok_or_else(|| ReportError::malformed(RecordKind::SalesHeader, "", "sales file is empty"))?;
    let salesman_doc = parser::parse_sales_file_header(header).map_err(|e| e.at_line(name, 1))?;

    let mut items = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parser::parse_sales_body(line).map_err(|e| e.at_line(name, idx + 1))?;
        items.extend(parsed);
    }

    Ok(SalesFile {
        name: name.to_string(),
        salesman_doc,
        items,
    })
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ReportError::io(e, path))
}

/// Non-blank lines paired with their 1-based line numbers.
fn records(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
