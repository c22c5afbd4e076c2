//! Catalog records consumed by the commerce core.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product as the external catalog exposes it.
///
/// Owned and mutated elsewhere; this layer only reads products and
/// snapshots them by value into carts and orders. Stock is carried for
/// display purposes and is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price; non-negative.
    pub price: Money,
    pub category: String,
    pub stock: u32,
    pub in_stock: bool,
}

impl Product {
    /// Creates a product record; `in_stock` follows from `stock`.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            stock,
            in_stock: stock > 0,
        }
    }
}
