//! Shared types for the storefront commerce core.
//!
//! Identifier newtypes and the [`Money`] value type used across the
//! kv-store and domain crates.

pub mod money;
pub mod types;

pub use money::Money;
pub use types::{NotificationId, OrderId, ProductId, TrackingNumber, UserId};
