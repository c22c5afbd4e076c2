//! Shipment-tracking timeline synthesized from order state.
//!
//! There is no carrier integration: the timeline is derived entirely
//! from the order's status and creation time, so it can be recomputed on
//! every read instead of being persisted.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::order::{Order, OrderStatus};

/// A milestone on the shipment timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMilestone {
    OrderPlaced,
    Processing,
    Shipped,
    Delivered,
}

impl TrackingMilestone {
    /// Returns the display label for the milestone.
    pub fn label(&self) -> &'static str {
        match self {
            TrackingMilestone::OrderPlaced => "Order Placed",
            TrackingMilestone::Processing => "Processing",
            TrackingMilestone::Shipped => "Shipped",
            TrackingMilestone::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for TrackingMilestone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One synthesized tracking event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub timestamp: DateTime<Utc>,
    pub milestone: TrackingMilestone,
    pub location: String,
    pub description: String,
}

// Milestone offsets from order creation. Fixed offsets keep the
// timeline identical across reads.
const PROCESSING_OFFSET_DAYS: i64 = 1;
const SHIPPED_OFFSET_DAYS: i64 = 2;
const DELIVERED_OFFSET_DAYS: i64 = 3;

/// Derives the tracking timeline for an order, most recent event first.
///
/// Every order shows the placed and processing steps; the shipped step
/// appears once the order has shipped, and the delivered step once it
/// has been delivered. Pure and idempotent: the same order always
/// yields the same events.
pub fn build_timeline(order: &Order) -> Vec<TrackingEvent> {
    let created_at = order.created_at();

    let mut events = vec![
        TrackingEvent {
            timestamp: created_at,
            milestone: TrackingMilestone::OrderPlaced,
            location: "Online".to_string(),
            description: "Your order has been placed and is being processed".to_string(),
        },
        TrackingEvent {
            timestamp: created_at + Duration::days(PROCESSING_OFFSET_DAYS),
            milestone: TrackingMilestone::Processing,
            location: "Warehouse - San Francisco, CA".to_string(),
            description: "Your order is being prepared for shipment".to_string(),
        },
    ];

    if order.status().is_shipped() {
        events.push(TrackingEvent {
            timestamp: created_at + Duration::days(SHIPPED_OFFSET_DAYS),
            milestone: TrackingMilestone::Shipped,
            location: "Distribution Center - Oakland, CA".to_string(),
            description: "Your package has been shipped and is on its way".to_string(),
        });
    }

    if order.status() == OrderStatus::Delivered {
        let address = order.shipping_address();
        events.push(TrackingEvent {
            timestamp: created_at + Duration::days(DELIVERED_OFFSET_DAYS),
            milestone: TrackingMilestone::Delivered,
            location: format!("{}, {}", address.city, address.state),
            description: "Package delivered successfully".to_string(),
        });
    }

    events.reverse();
    events
}
