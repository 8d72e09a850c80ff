// src/report.rs
//! Ranks the aggregates and renders them as `label;value` lines.

use crate::error::{ReferenceKind, ReportError, Result};
use crate::types::{ProductMap, ProductQty, SalesmanMap, SalesmanMoney};
use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a decimal with exactly two fractional digits, `.` as the separator
/// and no grouping. Halves round away from zero.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Builds `FullName;Revenue` lines, highest revenue first.
///
/// Equal revenues keep the order in which the salesmen were first accumulated.
///
/// # Errors
/// Returns `MissingReference` if a document number has no salesman.
pub fn salesman_report(salesman_money: &SalesmanMoney, salesmen: &SalesmanMap) -> Result<Vec<String>> {
    let mut rows: Vec<(&String, &Decimal)> = salesman_money.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1));

    rows.into_iter()
        .map(|(doc, revenue)| {
            let salesman = salesmen.get(doc).ok_or_else(|| ReportError::MissingReference {
                kind: ReferenceKind::Salesman,
                key: doc.clone(),
            })?;
            Ok(format!("{};{}", salesman.full_name(), format_money(*revenue)))
        })
        .collect()
}

/// Builds `ProductName;UnitPrice` lines, most units sold first.
///
/// The rendered value is the product's unit price while the ranking uses the
/// quantity sold; existing consumers of this report depend on that layout.
/// Equal quantities keep first-accumulated order.
///
/// # Errors
/// Returns `MissingReference` if a product id has no product.
pub fn product_report(product_qty: &ProductQty, products: &ProductMap) -> Result<Vec<String>> {
    let mut rows: Vec<(&String, &u64)> = product_qty.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1));

    rows.into_iter()
        .map(|(id, _)| {
            let product = products.get(id).ok_or_else(|| ReportError::MissingReference {
                kind: ReferenceKind::Product,
                key: id.clone(),
            })?;
            Ok(format!("{};{}", product.name, format_money(product.unit_price)))
        })
        .collect()
}
