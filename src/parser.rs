// src/parser.rs
//! Turns raw `;`-delimited lines into typed records.
//!
//! Every function here is a pure text transformation; reading files is the
//! loader's job.

use crate::error::{RecordKind, ReportError, Result};
use crate::types::{Product, SaleItem, Salesman};
use rust_decimal::Decimal;
use std::str::FromStr;

const DELIMITER: char = ';';

/// Splits a line on `;`, dropping trailing empty fields.
///
/// `"P001;5;"` yields two fields and an empty line yields none.
#[must_use]
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parses `ID;Name;Price`.
///
/// # Errors
/// Returns `MalformedRecord` if the field count is not 3 or the price is not a decimal.
pub fn parse_product_line(line: &str) -> Result<Product> {
    let fields = expect_fields(RecordKind::Product, line, 3)?;
    let unit_price = Decimal::from_str(fields[2]).map_err(|e| {
        ReportError::malformed(
            RecordKind::Product,
            line,
            format!("price {:?} is not a decimal: {e}", fields[2]),
        )
    })?;

    Ok(Product {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        unit_price,
    })
}

/// Parses `DocType;DocNumber;FirstName;LastName`.
///
/// # Errors
/// Returns `MalformedRecord` if the field count is not 4.
pub fn parse_salesman_line(line: &str) -> Result<Salesman> {
    let fields = expect_fields(RecordKind::Salesman, line, 4)?;
    Ok(Salesman {
        doc_type: fields[0].to_string(),
        doc_number: fields[1].to_string(),
        first_name: fields[2].to_string(),
        last_name: fields[3].to_string(),
    })
}

/// Parses the `Tag;DocNumber` header of a sales file and returns the document number.
///
/// The tag itself is not checked.
///
/// # Errors
/// Returns `MalformedRecord` if the field count is not 2.
pub fn parse_sales_file_header(line: &str) -> Result<String> {
    let fields = expect_fields(RecordKind::SalesHeader, line, 2)?;
    Ok(fields[1].to_string())
}

/// Parses a body line of alternating `ProductId;Quantity` pairs.
///
/// # Errors
/// Returns `MalformedRecord` if the field count is odd or a quantity is not a
/// positive integer.
pub fn parse_sales_body(line: &str) -> Result<Vec<SaleItem>> {
    let fields = split_fields(line);
    if fields.len() % 2 != 0 {
        return Err(ReportError::malformed(
            RecordKind::SalesBody,
            line,
            format!("expected productId;quantity pairs, found {} fields", fields.len()),
        ));
    }

    fields
        .chunks_exact(2)
        .map(|pair| {
            let quantity = pair[1].parse::<u64>().map_err(|e| {
                ReportError::malformed(
                    RecordKind::SalesBody,
                    line,
                    format!("quantity {:?} for {:?} is not an integer: {e}", pair[1], pair[0]),
                )
            })?;
            if quantity == 0 {
                return Err(ReportError::malformed(
                    RecordKind::SalesBody,
                    line,
                    format!("quantity for {:?} must be at least 1", pair[0]),
                ));
            }
            Ok(SaleItem {
                product_id: pair[0].to_string(),
                quantity,
            })
        })
        .collect()
}

fn expect_fields(kind: RecordKind, line: &str, count: usize) -> Result<Vec<&str>> {
    let fields = split_fields(line);
    if fields.len() != count {
        return Err(ReportError::malformed(
            kind,
            line,
            format!("expected {count} fields, found {}", fields.len()),
        ));
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_only_trailing_empties() {
        assert_eq!(split_fields("a;;b;;"), vec!["a", "", "b"]);
        assert!(split_fields("").is_empty());
        assert!(split_fields(";;").is_empty());
    }

    #[test]
    fn expect_fields_reports_count() {
        let err = expect_fields(RecordKind::Salesman, "CC;111", 4).unwrap_err();
        assert!(err.to_string().contains("expected 4 fields, found 2"));
    }
}
