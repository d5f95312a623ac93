//! Driving port for event pass carts and checkout.

use async_trait::async_trait;

use crate::domain::{CartView, Error, EventId, Order, UserId};

/// Manage a user's cart of event passes and check it out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartCommand: Send + Sync {
    /// Items of the user's active cart; empty when no cart is open.
    async fn cart(&self, user_id: UserId) -> Result<CartView, Error>;

    /// Add one pass for `event_id` at its current price.
    async fn add_item(&self, user_id: UserId, event_id: EventId) -> Result<CartView, Error>;

    /// Drop the pass for `event_id`. Removing an absent item is not an error.
    async fn remove_item(&self, user_id: UserId, event_id: EventId) -> Result<CartView, Error>;

    /// Empty the active cart.
    async fn clear(&self, user_id: UserId) -> Result<(), Error>;

    /// Turn the active cart into a pending order.
    ///
    /// # Errors
    ///
    /// `invalid_request` when the cart is empty.
    async fn checkout(&self, user_id: UserId) -> Result<Order, Error>;

    /// Orders placed by `user_id`, oldest first.
    async fn orders(&self, user_id: UserId) -> Result<Vec<Order>, Error>;
}
