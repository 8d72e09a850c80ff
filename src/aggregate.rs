// src/aggregate.rs
use crate::error::{ReportError, Result};
use crate::types::{ProductMap, ProductQty, SaleItem, SalesmanMoney};
use rust_decimal::Decimal;

/// Counts of what one `accumulate` call did with its items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldStats {
    pub folded: usize,
    pub skipped: usize,
}

/// Running totals across every processed sales file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub product_qty: ProductQty,
    pub salesman_money: SalesmanMoney,
}

impl Aggregates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one salesman's items into both totals.
    ///
    /// # Errors
    /// Returns `Overflow` if a running total no longer fits.
    pub fn fold(
        &mut self,
        products: &ProductMap,
        salesman_doc: &str,
        items: &[SaleItem],
    ) -> Result<FoldStats> {
        accumulate(
            products,
            salesman_doc,
            items,
            &mut self.product_qty,
            &mut self.salesman_money,
        )
    }
}

/// Adds each item's quantity to `product_qty` and its revenue
/// (`unit_price * quantity`) to `salesman_money[salesman_doc]`.
///
/// Items whose product id is not in `products` are skipped without error and
/// create no entry in either map. An item whose totals would overflow leaves both
/// maps as they were before that item.
///
/// # Errors
/// Returns `Overflow` if a quantity, revenue or running total no longer fits.
pub fn accumulate(
    products: &ProductMap,
    salesman_doc: &str,
    items: &[SaleItem],
    product_qty: &mut ProductQty,
    salesman_money: &mut SalesmanMoney,
) -> Result<FoldStats> {
    let mut stats = FoldStats::default();

    for item in items {
        let Some(product) = products.get(&item.product_id) else {
            tracing::warn!(
                product_id = %item.product_id,
                salesman = salesman_doc,
                "skipping sale item for unknown product"
            );
            stats.skipped += 1;
            continue;
        };

        let qty = product_qty
            .get(&product.id)
            .copied()
            .unwrap_or(0)
            .checked_add(item.quantity)
            .ok_or_else(|| overflow("quantity", &product.id))?;
        let money = product
            .unit_price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|revenue| {
                salesman_money
                    .get(salesman_doc)
                    .copied()
                    .unwrap_or(Decimal::ZERO)
                    .checked_add(revenue)
            })
            .ok_or_else(|| overflow("revenue", salesman_doc))?;

        product_qty.insert(product.id.clone(), qty);
        salesman_money.insert(salesman_doc.to_string(), money);
        stats.folded += 1;
    }

    Ok(stats)
}

fn overflow(total: &'static str, key: &str) -> ReportError {
    ReportError::Overflow {
        total,
        key: key.to_string(),
    }
}
