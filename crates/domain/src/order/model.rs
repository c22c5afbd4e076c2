//! The persisted order record.

use chrono::{DateTime, Utc};
use common::{Money, OrderId, TrackingNumber, UserId};
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::pricing::PriceBreakdown;

use super::{Address, OrderStatus, PaymentMethod};

/// A placed order.
///
/// Items and pricing are a by-value snapshot of the cart at checkout;
/// mutating the cart afterwards never touches a placed order. Everything
/// except `status` is frozen at creation, and `status` only advances
/// through the ledger's transition check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub(crate) id: OrderId,
    pub(crate) user_id: UserId,
    pub(crate) items: Vec<LineItem>,
    /// Full pricing at creation time, discount included, so historical
    /// orders display what was actually charged.
    pub(crate) pricing: PriceBreakdown,
    pub(crate) status: OrderStatus,
    pub(crate) shipping_address: Address,
    pub(crate) payment_method: PaymentMethod,
    pub(crate) promo_code: Option<String>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) estimated_delivery: DateTime<Utc>,
    pub(crate) tracking_number: TrackingNumber,
}

impl Order {
    /// Returns the order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the user who placed the order.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the line items snapshotted at checkout.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the frozen pricing breakdown.
    pub fn pricing(&self) -> &PriceBreakdown {
        &self.pricing
    }

    /// Returns the grand total charged for the order.
    pub fn total(&self) -> Money {
        self.pricing.total
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the shipping address.
    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    /// Returns the recorded payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Returns the promotion code applied at checkout, if any.
    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    /// Returns when the order was placed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the estimated delivery date.
    pub fn estimated_delivery(&self) -> DateTime<Utc> {
        self.estimated_delivery
    }

    /// Returns the shipment tracking number.
    pub fn tracking_number(&self) -> &TrackingNumber {
        &self.tracking_number
    }

    /// Returns the number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all line items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Returns true if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // Only the ledger moves an order through its lifecycle; the
    // transition is validated there before this is called.
    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
