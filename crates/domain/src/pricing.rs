//! Pure pricing computations: subtotal, shipping, tax, promotions, totals.
//!
//! Every function here is deterministic and side-effect-free so the same
//! math runs at cart-view time and at order-creation time with no
//! discrepancy. Amounts stay unrounded internally; rounding to currency
//! precision happens only when a [`common::Money`] is displayed.

use std::collections::HashMap;

use common::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::order::PaymentMethod;

/// Pricing knobs with storefront defaults.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Orders strictly above this subtotal ship free.
    pub free_shipping_threshold: Money,
    /// Flat fee charged below the threshold.
    pub flat_shipping_fee: Money,
    /// Sales tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// Handling fee for cash-on-delivery orders.
    pub cod_surcharge: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::from_dollars(50),
            flat_shipping_fee: Money::from_cents(999),
            tax_rate: Decimal::new(8, 2),
            cod_surcharge: Money::from_cents(299),
        }
    }
}

/// A discount rule a promotion code maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// A fraction of the subtotal, e.g. 0.10 for 10% off.
    PercentOfSubtotal(Decimal),
    /// The full shipping fee is waived.
    FreeShipping,
}

/// Table of recognized promotion codes.
///
/// Codes are matched case-insensitively. An unknown code yields a zero
/// discount, never an error. New codes extend the table without touching
/// the engine.
#[derive(Debug, Clone)]
pub struct PromoTable {
    codes: HashMap<String, Discount>,
}

impl PromoTable {
    /// Creates a table with no codes.
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Registers a code, replacing any existing rule for it.
    pub fn insert(&mut self, code: impl Into<String>, discount: Discount) {
        self.codes.insert(code.into().to_uppercase(), discount);
    }

    /// Resolves a code to its discount amount against the given subtotal
    /// and shipping fee. Unknown codes discount nothing.
    pub fn discount_for(&self, code: &str, subtotal: Money, shipping_fee: Money) -> Money {
        match self.codes.get(&code.to_uppercase()) {
            Some(Discount::PercentOfSubtotal(rate)) => subtotal.times(*rate),
            Some(Discount::FreeShipping) => shipping_fee,
            None => Money::zero(),
        }
    }
}

impl Default for PromoTable {
    /// The storefront's stock codes: `SAVE10` (10% of subtotal) and
    /// `FREESHIP` (shipping fee waived).
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("SAVE10", Discount::PercentOfSubtotal(Decimal::new(10, 2)));
        table.insert("FREESHIP", Discount::FreeShipping);
        table
    }
}

/// The full pricing of a cart or order at one point in time.
///
/// Frozen onto the order at creation so historical orders display the
/// breakdown they were actually charged, discount included, instead of
/// re-deriving figures from the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub discount: Money,
    pub surcharge: Money,
    pub total: Money,
}

/// Pure pricing functions over a configuration and promo table.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
    promotions: PromoTable,
}

impl PricingEngine {
    /// Creates an engine with the given configuration and promo table.
    pub fn new(config: PricingConfig, promotions: PromoTable) -> Self {
        Self {
            config,
            promotions,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Sum of `price × quantity` over the items. Exact, never rounded.
    pub fn subtotal(items: &[LineItem]) -> Money {
        items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.line_total())
    }

    /// Zero once the subtotal strictly exceeds the free-shipping
    /// threshold; at or below it, the flat fee applies.
    pub fn shipping_fee(&self, subtotal: Money) -> Money {
        if subtotal > self.config.free_shipping_threshold {
            Money::zero()
        } else {
            self.config.flat_shipping_fee
        }
    }

    /// Sales tax on the subtotal, unrounded.
    pub fn tax(&self, subtotal: Money) -> Money {
        subtotal.times(self.config.tax_rate)
    }

    /// Discount for an optional promotion code.
    pub fn discount(&self, code: Option<&str>, subtotal: Money, shipping_fee: Money) -> Money {
        match code {
            Some(code) => self.promotions.discount_for(code, subtotal, shipping_fee),
            None => Money::zero(),
        }
    }

    /// Payment-method handling fee (cash on delivery carries one).
    pub fn surcharge(&self, payment_method: PaymentMethod) -> Money {
        if payment_method.has_surcharge() {
            self.config.cod_surcharge
        } else {
            Money::zero()
        }
    }

    /// `subtotal + shipping + tax − discount + surcharge`.
    pub fn grand_total(
        subtotal: Money,
        shipping: Money,
        tax: Money,
        discount: Money,
        surcharge: Money,
    ) -> Money {
        subtotal + shipping + tax - discount + surcharge
    }

    /// Prices a set of line items in one pass.
    ///
    /// `payment_method` is `None` at cart-view time, where no surcharge
    /// applies yet.
    pub fn quote(
        &self,
        items: &[LineItem],
        promo_code: Option<&str>,
        payment_method: Option<PaymentMethod>,
    ) -> PriceBreakdown {
        let subtotal = Self::subtotal(items);
        let shipping = self.shipping_fee(subtotal);
        let tax = self.tax(subtotal);
        let discount = self.discount(promo_code, subtotal, shipping);
        let surcharge = match payment_method {
            Some(method) => self.surcharge(method),
            None => Money::zero(),
        };
        let total = Self::grand_total(subtotal, shipping, tax, discount, surcharge);

        PriceBreakdown {
            subtotal,
            shipping,
            tax,
            discount,
            surcharge,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn item(sku: &str, price_cents: i64, quantity: u32) -> LineItem {
        LineItem::new(
            Product::new(sku, format!("Product {sku}"), Money::from_cents(price_cents), "test", 10),
            quantity,
        )
    }

    /// 2 x $20.00 + 1 x $15.00 = $55.00 subtotal.
    fn over_threshold_cart() -> Vec<LineItem> {
        vec![item("SKU-A", 2000, 2), item("SKU-B", 1500, 1)]
    }

    #[test]
    fn subtotal_is_exact_sum() {
        assert_eq!(
            PricingEngine::subtotal(&over_threshold_cart()),
            Money::from_cents(5500)
        );
        assert_eq!(PricingEngine::subtotal(&[]), Money::zero());
    }

    #[test]
    fn shipping_free_only_strictly_above_threshold() {
        let engine = PricingEngine::default();

        assert_eq!(engine.shipping_fee(Money::from_cents(5001)), Money::zero());
        // Exactly at the threshold still pays the fee.
        assert_eq!(
            engine.shipping_fee(Money::from_dollars(50)),
            Money::from_cents(999)
        );
        assert_eq!(
            engine.shipping_fee(Money::from_cents(3000)),
            Money::from_cents(999)
        );
    }

    #[test]
    fn tax_is_unrounded() {
        let engine = PricingEngine::default();
        assert_eq!(
            engine.tax(Money::from_cents(5500)),
            Money::from_cents(440)
        );
        // 8% of $10.01 keeps its sub-cent precision internally.
        assert_eq!(
            engine.tax(Money::from_cents(1001)).amount(),
            Decimal::new(8008, 4)
        );
    }

    #[test]
    fn quote_without_promo() {
        let engine = PricingEngine::default();
        let breakdown = engine.quote(&over_threshold_cart(), None, None);

        assert_eq!(breakdown.subtotal, Money::from_cents(5500));
        assert_eq!(breakdown.shipping, Money::zero());
        assert_eq!(breakdown.tax, Money::from_cents(440));
        assert_eq!(breakdown.discount, Money::zero());
        assert_eq!(breakdown.total, Money::from_cents(5940));
    }

    #[test]
    fn quote_with_save10() {
        let engine = PricingEngine::default();
        let breakdown = engine.quote(&over_threshold_cart(), Some("SAVE10"), None);

        assert_eq!(breakdown.discount, Money::from_cents(550));
        assert_eq!(breakdown.total, Money::from_cents(5390));
    }

    #[test]
    fn quote_with_freeship_refunds_the_fee() {
        let engine = PricingEngine::default();
        // $30.00 subtotal: shipping applies, FREESHIP cancels it out.
        let items = vec![item("SKU-C", 3000, 1)];
        let breakdown = engine.quote(&items, Some("FREESHIP"), None);

        assert_eq!(breakdown.subtotal, Money::from_cents(3000));
        assert_eq!(breakdown.shipping, Money::from_cents(999));
        assert_eq!(breakdown.discount, Money::from_cents(999));
        assert_eq!(breakdown.tax, Money::from_cents(240));
        assert_eq!(breakdown.total, Money::from_cents(3240));
    }

    #[test]
    fn promo_codes_are_case_insensitive() {
        let engine = PricingEngine::default();
        let upper = engine.quote(&over_threshold_cart(), Some("SAVE10"), None);
        let lower = engine.quote(&over_threshold_cart(), Some("save10"), None);
        assert_eq!(upper, lower);
    }

    #[test]
    fn unknown_promo_code_changes_nothing() {
        let engine = PricingEngine::default();
        let plain = engine.quote(&over_threshold_cart(), None, None);
        let bogus = engine.quote(&over_threshold_cart(), Some("BOGUS99"), None);

        assert_eq!(bogus.discount, Money::zero());
        assert_eq!(bogus.total, plain.total);
    }

    #[test]
    fn freeship_on_free_shipping_order_discounts_nothing() {
        let engine = PricingEngine::default();
        let breakdown = engine.quote(&over_threshold_cart(), Some("FREESHIP"), None);
        assert_eq!(breakdown.shipping, Money::zero());
        assert_eq!(breakdown.discount, Money::zero());
    }

    #[test]
    fn cod_adds_the_surcharge() {
        let engine = PricingEngine::default();
        let with_cod = engine.quote(&over_threshold_cart(), None, Some(PaymentMethod::Cod));
        let with_card = engine.quote(&over_threshold_cart(), None, Some(PaymentMethod::Card));

        assert_eq!(with_cod.surcharge, Money::from_cents(299));
        assert_eq!(with_cod.total, Money::from_cents(6239));
        assert_eq!(with_card.surcharge, Money::zero());
        assert_eq!(with_card.total, Money::from_cents(5940));
    }

    #[test]
    fn quote_is_deterministic() {
        let engine = PricingEngine::default();
        let first = engine.quote(&over_threshold_cart(), Some("SAVE10"), Some(PaymentMethod::Cod));
        let second = engine.quote(&over_threshold_cart(), Some("SAVE10"), Some(PaymentMethod::Cod));
        assert_eq!(first, second);
    }

    #[test]
    fn custom_codes_extend_the_table() {
        let mut promotions = PromoTable::default();
        promotions.insert("HALFOFF", Discount::PercentOfSubtotal(Decimal::new(50, 2)));
        let engine = PricingEngine::new(PricingConfig::default(), promotions);

        let breakdown = engine.quote(&over_threshold_cart(), Some("halfoff"), None);
        assert_eq!(breakdown.discount, Money::from_cents(2750));
    }

    #[test]
    fn breakdown_serialization_roundtrip() {
        let engine = PricingEngine::default();
        let breakdown = engine.quote(&over_threshold_cart(), Some("SAVE10"), Some(PaymentMethod::Cod));

        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: PriceBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }
}
