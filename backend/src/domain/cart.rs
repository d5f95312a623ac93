//! Event pass carts and the orders produced by checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CartId, CartItemId, EventId, OrderId, UserId};

/// Lifecycle state of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    /// Open for changes.
    Active,
    /// Converted into an order.
    CheckedOut,
}

/// A user's cart. Each user has at most one active cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    id: CartId,
    user_id: UserId,
    status: CartStatus,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Open an empty, active cart.
    pub fn new(id: CartId, user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            status: CartStatus::Active,
            created_at,
        }
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    /// Owner of the cart.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn status(&self) -> CartStatus {
        self.status
    }

    /// Whether the cart still accepts items.
    pub fn is_active(&self) -> bool {
        self.status == CartStatus::Active
    }

    /// Close the cart once its order is placed.
    pub(crate) fn check_out(&mut self) {
        self.status = CartStatus::CheckedOut;
    }
}

/// Event pass held in a cart, priced when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    id: CartItemId,
    cart_id: CartId,
    event_id: EventId,
    #[schema(example = 1)]
    quantity: u32,
    /// Unit price in whole rupees.
    #[schema(example = 350)]
    price: u32,
}

impl CartItem {
    /// Single pass for `event_id` at `price`.
    pub fn new(id: CartItemId, cart_id: CartId, event_id: EventId, price: u32) -> Self {
        Self {
            id,
            cart_id,
            event_id,
            quantity: 1,
            price,
        }
    }

    pub fn id(&self) -> CartItemId {
        self.id
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Event the pass admits to.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Number of passes. Always one today.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price captured when the item was added.
    pub fn price(&self) -> u32 {
        self.price
    }

    /// `price * quantity`.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// Items of the active cart and their derived total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Items in insertion order.
    pub items: Vec<CartItem>,
    /// Sum of item subtotals, in whole rupees.
    #[schema(example = 450)]
    pub total: u64,
}

impl CartView {
    /// Derive the total from `items`.
    ///
    /// # Examples
    ///
    /// ```
    /// use backend::domain::{CartId, CartItem, CartItemId, CartView, EventId};
    ///
    /// let cart = CartId::new(1);
    /// let items = vec![
    ///     CartItem::new(CartItemId::new(1), cart, EventId::new(1), 350),
    ///     CartItem::new(CartItemId::new(2), cart, EventId::new(2), 100),
    /// ];
    /// assert_eq!(CartView::from_items(items).total, 450);
    /// ```
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::subtotal).sum();
        Self { items, total }
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting payment.
    Pending,
    Paid,
    Cancelled,
}

/// Order created by checking out a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    status: OrderStatus,
    #[schema(example = 450)]
    total: u64,
    payment_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Pending order awaiting payment.
    pub fn pending(id: OrderId, user_id: UserId, total: u64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            status: OrderStatus::Pending,
            total,
            payment_id: None,
            created_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// User who placed the order.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Payment state of the order.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Cart total at checkout, in whole rupees.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Gateway reference, set once a payment is recorded.
    pub fn payment_id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn total_sums_price_times_quantity() {
        let cart = CartId::new(1);
        let view = CartView::from_items(vec![
            CartItem::new(CartItemId::new(1), cart, EventId::new(1), 350),
            CartItem::new(CartItemId::new(2), cart, EventId::new(2), 100),
        ]);
        assert_eq!(view.total, 450);
    }

    #[rstest]
    fn empty_view_totals_zero() {
        assert_eq!(CartView::default().total, 0);
    }
}
