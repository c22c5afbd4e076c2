//! User-scoped notifications with read/unread state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{NotificationId, UserId};
use kv_store::{KvStore, KvStoreExt, key};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::DomainError;
use crate::order::{Order, OrderStatus};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Items are waiting in the user's cart.
    CartReminder,
    /// An order changed status.
    OrderUpdate,
    /// A storefront promotion.
    Promotion,
}

impl NotificationKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::CartReminder => "cart_reminder",
            NotificationKind::OrderUpdate => "order_update",
            NotificationKind::Promotion => "promotion",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A notification addressed to one user.
///
/// Mutated only by marking it read; removed only by a clear-all. The
/// user reference is weak: if the user record disappears, the list just
/// becomes unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Stores and serves per-user notifications.
///
/// Each user's notifications live under one namespaced key in the
/// durable store. Writes serialize through an internal mutex; reads take
/// no lock. Cloning yields a handle to the same center. Notifications
/// persist until explicitly cleared.
#[derive(Debug, Clone)]
pub struct NotificationCenter<S: KvStore> {
    store: S,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KvStore> NotificationCenter<S> {
    /// Creates a notification center over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Appends a new unread notification and returns it.
    ///
    /// IDs are unique and creation-ordered.
    #[instrument(skip(self, title, message), fields(user_id = %user_id, kind = %kind))]
    pub async fn notify(
        &self,
        user_id: UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Notification, DomainError> {
        let notification = Notification {
            id: NotificationId::new(),
            user_id,
            kind,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
        };

        let _guard = self.write_lock.lock().await;
        let list_key = key::notifications(user_id);
        let mut list: Vec<Notification> =
            self.store.get_record(&list_key).await?.unwrap_or_default();
        list.push(notification.clone());
        self.store.set_record(&list_key, &list).await?;

        metrics::counter!("notifications_sent_total").increment(1);
        tracing::debug!(id = %notification.id, "notification stored");
        Ok(notification)
    }

    /// Marks a notification as read.
    ///
    /// No-op if the ID is absent or the notification is already read.
    #[instrument(skip(self), fields(user_id = %user_id, id = %id))]
    pub async fn mark_read(
        &self,
        user_id: UserId,
        id: NotificationId,
    ) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let list_key = key::notifications(user_id);
        let mut list: Vec<Notification> =
            self.store.get_record(&list_key).await?.unwrap_or_default();

        if let Some(notification) = list.iter_mut().find(|n| n.id == id && !n.read) {
            notification.read = true;
            self.store.set_record(&list_key, &list).await?;
        }
        Ok(())
    }

    /// Returns all notifications for the user, newest first.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Notification>, DomainError> {
        let mut list: Vec<Notification> = self
            .store
            .get_record(&key::notifications(user_id))
            .await?
            .unwrap_or_default();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(list)
    }

    /// Returns how many of the user's notifications are unread.
    pub async fn unread_count(&self, user_id: UserId) -> Result<usize, DomainError> {
        Ok(self
            .list_for_user(user_id)
            .await?
            .iter()
            .filter(|n| !n.read)
            .count())
    }

    /// Removes every notification for the user.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn clear_all(&self, user_id: UserId) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        self.store.delete(&key::notifications(user_id)).await?;
        Ok(())
    }

    /// Reminds a user about items waiting in their cart.
    pub async fn cart_reminder(
        &self,
        user_id: UserId,
        item_count: usize,
    ) -> Result<Notification, DomainError> {
        let message = if item_count == 1 {
            "You have an item waiting in your cart.".to_string()
        } else {
            format!("You have {item_count} items waiting in your cart.")
        };
        self.notify(user_id, NotificationKind::CartReminder, "Items in your cart", message)
            .await
    }

    /// Announces a promotion to a user.
    pub async fn promotion(
        &self,
        user_id: UserId,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Notification, DomainError> {
        self.notify(user_id, NotificationKind::Promotion, title, message)
            .await
    }

    /// Tells an order's user about its current status.
    pub async fn order_update(&self, order: &Order) -> Result<Notification, DomainError> {
        let id = order.id();
        let message = match order.status() {
            OrderStatus::Pending => {
                format!("Your order {id} has been placed and will be processed soon.")
            }
            OrderStatus::Processing => {
                format!("Your order {id} is being prepared for shipment.")
            }
            OrderStatus::Shipped => format!(
                "Your order {id} has been shipped. Track it with {}.",
                order.tracking_number()
            ),
            OrderStatus::Delivered => format!("Your order {id} has been delivered."),
            OrderStatus::Cancelled => format!("Your order {id} has been cancelled."),
        };
        self.notify(order.user_id(), NotificationKind::OrderUpdate, "Order update", message)
            .await
    }
}
