//! Domain error taxonomy.
//!
//! Four kinds, all typed so callers can branch on them: validation
//! problems are user-correctable, not-found is an ordinary page state,
//! conflicts are rejected mutations that left nothing changed, and
//! persistence failures are retryable by the caller.

use common::{OrderId, TrackingNumber};
use kv_store::KvStoreError;
use thiserror::Error;

use crate::order::OrderStatus;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The input was invalid; the user can correct it and retry.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// The mutation conflicts with existing state and had no effect.
    #[error("Conflict: {0}")]
    Conflict(#[from] ConflictError),

    /// The durable store failed; retryable, never retried internally.
    #[error("Persistence error: {0}")]
    Persistence(#[from] KvStoreError),
}

/// User-correctable checkout input problems.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Checkout requires at least one line item.
    #[error("Cart is empty")]
    EmptyCart,

    /// A required shipping-address field was empty.
    #[error("Shipping address is missing {field}")]
    MissingAddressField { field: &'static str },
}

/// Lookup targets that do not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// No order with this ID.
    #[error("Order not found: {0}")]
    Order(OrderId),

    /// No order with this tracking number.
    #[error("No order with tracking number {0}")]
    Tracking(TrackingNumber),
}

/// Mutations rejected because of existing state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConflictError {
    /// An order with this ID is already persisted.
    #[error("Order already exists: {0}")]
    DuplicateOrder(OrderId),

    /// Another order already carries this tracking number.
    #[error("Tracking number already in use: {0}")]
    DuplicateTracking(TrackingNumber),

    /// The requested status change is not in the transition table.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
}
