//! Session-scoped shopping cart.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::pricing::{PriceBreakdown, PricingEngine};

/// A (product, quantity) pairing within a cart or order.
///
/// The product is carried by value, so an order's items stay what they
/// were at checkout regardless of later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    /// Always at least 1 inside a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Returns `price × quantity` for this line.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// The active session's line items.
///
/// One cart per session, created empty on session start and mutated only
/// from that session, so no locking is involved. Cart operations never
/// fail: missing products are no-ops and stock limits are a display
/// concern checked elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns true if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all line items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Adds a product to the cart.
    ///
    /// If the product is already present its quantity is incremented
    /// instead of adding a duplicate line. Adding zero is a no-op.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            existing.quantity += quantity;
        } else {
            self.items.push(LineItem::new(product, quantity));
        }
    }

    /// Sets the quantity for a product; below 1 removes the line.
    ///
    /// No-op if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity < 1 {
            self.remove_item(product_id);
            return;
        }
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| &item.product.id == product_id)
        {
            existing.quantity = quantity;
        }
    }

    /// Removes a product's line item. No-op if absent.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|item| &item.product.id != product_id);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Prices the cart through the engine.
    ///
    /// Recomputed on every call and never cached: prices and promotions
    /// can change between reads.
    pub fn totals(&self, pricing: &PricingEngine, promo_code: Option<&str>) -> PriceBreakdown {
        pricing.quote(&self.items, promo_code, None)
    }
}
