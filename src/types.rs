// src/types.rs
//! Entities read from the input files and the maps they are kept in.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A product that can be sold. Keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub unit_price: Decimal,
}

/// A salesperson. Keyed by `doc_number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salesman {
    pub doc_type: String,
    pub doc_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl Salesman {
    /// First and last name joined by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One `(productId, quantity)` pair from a sales file body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleItem {
    pub product_id: String,
    pub quantity: u64,
}

/// All sale items from one file, attributed to a single salesman.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesFile {
    pub name: String,
    pub salesman_doc: String,
    pub items: Vec<SaleItem>,
}

pub type ProductMap = HashMap<String, Product>;
pub type SalesmanMap = HashMap<String, Salesman>;

/// `productId -> total quantity sold`, in first-seen order.
pub type ProductQty = IndexMap<String, u64>;

/// `salesmanDocNumber -> total revenue`, in first-seen order.
pub type SalesmanMoney = IndexMap<String, Decimal>;

/// Rendered report lines, ready to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reports {
    pub salesmen: Vec<String>,
    pub products: Vec<String>,
}
