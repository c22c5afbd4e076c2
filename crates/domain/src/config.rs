//! Domain configuration loaded from environment variables.

use common::Money;
use rust_decimal::Decimal;

use crate::order::DEFAULT_DELIVERY_LEAD_DAYS;
use crate::pricing::PricingConfig;

/// Pricing and checkout knobs with storefront defaults.
///
/// Reads from environment variables, falling back per field:
/// - `FREE_SHIPPING_THRESHOLD` — subtotal above which shipping is free
///   (default: `50.00`)
/// - `FLAT_SHIPPING_FEE` — fee below the threshold (default: `9.99`)
/// - `TAX_RATE` — sales tax rate (default: `0.08`)
/// - `COD_SURCHARGE` — cash-on-delivery handling fee (default: `2.99`)
/// - `DELIVERY_LEAD_DAYS` — estimated delivery lead (default: `7`)
#[derive(Debug, Clone)]
pub struct DomainConfig {
    pub pricing: PricingConfig,
    pub delivery_lead_days: i64,
}

impl DomainConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = PricingConfig::default();
        Self {
            pricing: PricingConfig {
                free_shipping_threshold: env_money("FREE_SHIPPING_THRESHOLD")
                    .unwrap_or(defaults.free_shipping_threshold),
                flat_shipping_fee: env_money("FLAT_SHIPPING_FEE")
                    .unwrap_or(defaults.flat_shipping_fee),
                tax_rate: env_decimal("TAX_RATE").unwrap_or(defaults.tax_rate),
                cod_surcharge: env_money("COD_SURCHARGE").unwrap_or(defaults.cod_surcharge),
            },
            delivery_lead_days: std::env::var("DELIVERY_LEAD_DAYS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_DELIVERY_LEAD_DAYS),
        }
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            delivery_lead_days: DEFAULT_DELIVERY_LEAD_DAYS,
        }
    }
}

fn env_decimal(name: &str) -> Option<Decimal> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

fn env_money(name: &str) -> Option<Money> {
    env_decimal(name).map(Money::new)
}
