//! Commerce domain layer for the storefront.
//!
//! This crate owns the storefront's business rules:
//! - [`PricingEngine`] for subtotal/shipping/tax/promotion math
//! - [`CartStore`] for the active session's line items
//! - [`OrderFactory`] for converting a cart snapshot into an order
//! - [`OrderLedger`] for persistence and the status lifecycle
//! - [`tracking::build_timeline`] for the synthesized shipment timeline
//! - [`NotificationCenter`] for user-scoped notifications
//!
//! Page rendering, authentication, and catalog management live outside
//! this layer; persistence goes through the host-provided store behind
//! the `kv-store` boundary.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notification;
pub mod order;
pub mod pricing;
pub mod tracking;

pub use cart::{CartStore, LineItem};
pub use catalog::Product;
pub use config::DomainConfig;
pub use error::{ConflictError, DomainError, NotFoundError, ValidationError};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use order::{
    Address, DEFAULT_DELIVERY_LEAD_DAYS, Order, OrderFactory, OrderLedger, OrderStatus,
    PaymentMethod,
};
pub use pricing::{Discount, PriceBreakdown, PricingConfig, PricingEngine, PromoTable};
pub use tracking::{TrackingEvent, TrackingMilestone, build_timeline};
