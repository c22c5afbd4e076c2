//! Converts a cart snapshot plus checkout input into an order record.

use chrono::{Duration, Utc};
use common::{OrderId, TrackingNumber, UserId};

use crate::cart::CartStore;
use crate::error::{DomainError, ValidationError};
use crate::pricing::PricingEngine;

use super::{Address, Order, OrderStatus, PaymentMethod};

/// Default days between order creation and estimated delivery.
pub const DEFAULT_DELIVERY_LEAD_DAYS: i64 = 7;

/// Builds immutable [`Order`] records from cart snapshots.
///
/// Constructs only: persisting the order into the ledger and clearing
/// the cart stay with the caller, which keeps checkout testable piece by
/// piece.
#[derive(Debug, Clone)]
pub struct OrderFactory {
    pricing: PricingEngine,
    delivery_lead_days: i64,
}

impl OrderFactory {
    /// Creates a factory pricing orders with the given engine.
    pub fn new(pricing: PricingEngine) -> Self {
        Self {
            pricing,
            delivery_lead_days: DEFAULT_DELIVERY_LEAD_DAYS,
        }
    }

    /// Overrides the delivery lead time.
    pub fn with_delivery_lead_days(mut self, days: i64) -> Self {
        self.delivery_lead_days = days;
        self
    }

    /// Returns the pricing engine the factory quotes with.
    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Creates a pending order from the cart's current contents.
    ///
    /// The cart's line items are snapshotted by value and the full
    /// pricing breakdown (promotion and payment-method surcharge
    /// included) is computed once and frozen onto the order. Fails with
    /// a validation error on an empty cart or an incomplete address;
    /// nothing is persisted either way.
    #[tracing::instrument(skip_all, fields(user_id = %user_id))]
    pub fn create_order(
        &self,
        cart: &CartStore,
        shipping_address: Address,
        payment_method: PaymentMethod,
        user_id: UserId,
        promo_code: Option<&str>,
    ) -> Result<Order, DomainError> {
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        if let Some(field) = shipping_address.first_missing_field() {
            return Err(ValidationError::MissingAddressField { field }.into());
        }

        let pricing = self
            .pricing
            .quote(cart.items(), promo_code, Some(payment_method));
        let created_at = Utc::now();

        let order = Order {
            id: OrderId::new(),
            user_id,
            items: cart.items().to_vec(),
            pricing,
            status: OrderStatus::Pending,
            shipping_address,
            payment_method,
            promo_code: promo_code.map(str::to_string),
            created_at,
            estimated_delivery: created_at + Duration::days(self.delivery_lead_days),
            tracking_number: TrackingNumber::generate(),
        };

        tracing::info!(order_id = %order.id(), total = %order.total(), "order created");
        Ok(order)
    }
}

impl Default for OrderFactory {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}
