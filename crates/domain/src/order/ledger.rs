//! Persistent order ledger with the status state machine.

use std::sync::Arc;

use common::{OrderId, TrackingNumber, UserId};
use kv_store::{KvStore, KvStoreExt, key};
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::{ConflictError, DomainError, NotFoundError};
use crate::notification::NotificationCenter;

use super::{Order, OrderStatus};

/// Persists orders and advances them through the status lifecycle.
///
/// Shared by the storefront and admin sides; cloning yields a handle to
/// the same ledger. Every write runs its read-modify-write cycle while
/// holding one internal mutex, so a customer placing an order and an
/// administrator updating a status can never interleave on the same
/// record. Reads take no lock.
///
/// Alongside each order the ledger maintains two index entries: the
/// tracking-number → order-id mapping and the per-user order-id list.
#[derive(Debug, Clone)]
pub struct OrderLedger<S: KvStore> {
    store: S,
    notifications: NotificationCenter<S>,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KvStore> OrderLedger<S> {
    /// Creates a ledger over the given store, emitting order-update
    /// notifications through the given center.
    pub fn new(store: S, notifications: NotificationCenter<S>) -> Self {
        Self {
            store,
            notifications,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Inserts a new order.
    ///
    /// Fails with a conflict if the order ID or its tracking number is
    /// already present; nothing is written in that case.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn save(&self, order: &Order) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let order_key = key::order(order.id());
        if self.store.contains(&order_key).await? {
            return Err(ConflictError::DuplicateOrder(order.id()).into());
        }
        let tracking_key = key::order_tracking_index(order.tracking_number());
        if self.store.contains(&tracking_key).await? {
            return Err(ConflictError::DuplicateTracking(order.tracking_number().clone()).into());
        }

        self.store.set_record(&order_key, order).await?;
        self.store.set_record(&tracking_key, &order.id()).await?;

        let index_key = key::order_user_index(order.user_id());
        let mut order_ids: Vec<OrderId> =
            self.store.get_record(&index_key).await?.unwrap_or_default();
        order_ids.push(order.id());
        self.store.set_record(&index_key, &order_ids).await?;

        metrics::counter!("orders_saved_total").increment(1);
        tracing::info!(total = %order.total(), "order persisted");
        Ok(())
    }

    /// Looks up an order by ID. Ordinary absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.store.get_record(&key::order(id)).await?)
    }

    /// Looks up an order by tracking number. Ordinary absence is
    /// `Ok(None)`.
    pub async fn find_by_tracking(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<Order>, DomainError> {
        let id: Option<OrderId> = self
            .store
            .get_record(&key::order_tracking_index(tracking_number))
            .await?;
        match id {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Returns all orders for a user, most recent first.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        let order_ids: Vec<OrderId> = self
            .store
            .get_record(&key::order_user_index(user_id))
            .await?
            .unwrap_or_default();

        let mut orders = Vec::with_capacity(order_ids.len());
        for id in order_ids {
            if let Some(order) = self.find_by_id(id).await? {
                orders.push(order);
            }
        }
        orders.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(orders)
    }

    /// Moves an order to `new_status` if the transition is allowed.
    ///
    /// On success the updated order is persisted, the order's user gets
    /// an order-update notification, and the updated record is returned.
    /// On an unknown ID or an illegal transition nothing is written and
    /// nothing is notified.
    #[instrument(skip(self), fields(order_id = %id, new_status = %new_status))]
    pub async fn update_status(
        &self,
        id: OrderId,
        new_status: OrderStatus,
    ) -> Result<Order, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut order = self
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::Order(id))?;

        let current = order.status();
        if !current.can_transition_to(new_status) {
            tracing::warn!(%current, "rejected status transition");
            return Err(ConflictError::InvalidTransition {
                from: current,
                to: new_status,
            }
            .into());
        }

        order.set_status(new_status);
        self.store.set_record(&key::order(id), &order).await?;

        metrics::counter!("order_status_updates_total").increment(1);
        tracing::info!(%current, "order status updated");

        self.notifications.order_update(&order).await?;
        Ok(order)
    }
}
