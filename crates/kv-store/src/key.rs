//! Key layout for the durable store.
//!
//! Every persisted record lives under a namespaced string key. All key
//! construction goes through this module so the layout has a single owner.

use common::{OrderId, TrackingNumber, UserId};

/// Key for an order record.
pub fn order(id: OrderId) -> String {
    format!("orders/{id}")
}

/// Key for the tracking-number index entry pointing at an order ID.
pub fn order_tracking_index(tracking_number: &TrackingNumber) -> String {
    format!("orders.tracking/{tracking_number}")
}

/// Key for a user's list of order IDs, most recent appended last.
pub fn order_user_index(user_id: UserId) -> String {
    format!("orders.user/{user_id}")
}

/// Key for a user's notification list.
pub fn notifications(user_id: UserId) -> String {
    format!("notifications/{user_id}")
}

/// Key for a user's cart.
///
/// The core keeps carts in memory for the session; this key exists for
/// hosts that choose to persist carts across sessions themselves.
pub fn cart(user_id: UserId) -> String {
    format!("cart/{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced() {
        let order_id = OrderId::new();
        let user_id = UserId::new();
        let tracking = TrackingNumber::new("TRK4F2A81C09BD3");

        assert_eq!(order(order_id), format!("orders/{order_id}"));
        assert_eq!(
            order_tracking_index(&tracking),
            "orders.tracking/TRK4F2A81C09BD3"
        );
        assert_eq!(order_user_index(user_id), format!("orders.user/{user_id}"));
        assert_eq!(notifications(user_id), format!("notifications/{user_id}"));
        assert_eq!(cart(user_id), format!("cart/{user_id}"));
    }

    #[test]
    fn keys_for_distinct_entities_never_collide() {
        let user_id = UserId::new();
        assert_ne!(order_user_index(user_id), notifications(user_id));
        assert_ne!(notifications(user_id), cart(user_id));
    }
}
