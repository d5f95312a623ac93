//! Event pass carts and checkout.
//!
//! A user has at most one active cart. Checkout marks it checked out and
//! records a pending [`Order`]; the next cart operation opens a fresh cart.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::CartCommand;
use crate::domain::{CartView, EntityStore, Error, EventId, Order, Store, UserId};

/// Cart service implementing the [`CartCommand`] port.
#[derive(Clone)]
pub struct CartService {
    store: Store,
    clock: Arc<dyn Clock>,
}

impl CartService {
    /// Build the service over a shared store and clock.
    pub fn new(store: Store, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn view(store: &EntityStore, user_id: UserId) -> CartView {
        store
            .active_cart(user_id)
            .map(|cart| CartView::from_items(store.cart_items(cart.id()).cloned().collect()))
            .unwrap_or_default()
    }
}

#[async_trait]
impl CartCommand for CartService {
    async fn cart(&self, user_id: UserId) -> Result<CartView, Error> {
        let store = self.store.lock()?;
        Ok(Self::view(&store, user_id))
    }

    async fn add_item(&self, user_id: UserId, event_id: EventId) -> Result<CartView, Error> {
        let now = self.clock.utc();
        let mut store = self.store.lock()?;
        if store.user(user_id).is_none() {
            return Err(Error::not_found("User not found"));
        }
        let price = store
            .event(event_id)
            .map(|event| event.price())
            .ok_or_else(|| Error::not_found("Event not found"))?;

        let in_cart = store
            .active_cart(user_id)
            .is_some_and(|cart| store.cart_items(cart.id()).any(|item| item.event_id() == event_id));
        if in_cart {
            return Err(Error::conflict("Event already in cart"));
        }

        let cart_id = store.open_cart(user_id, now);
        store.insert_cart_item(cart_id, event_id, price);
        Ok(Self::view(&store, user_id))
    }

    async fn remove_item(&self, user_id: UserId, event_id: EventId) -> Result<CartView, Error> {
        let mut store = self.store.lock()?;
        if let Some(cart_id) = store.active_cart(user_id).map(|cart| cart.id()) {
            store.retain_cart_items(cart_id, |item| item.event_id() != event_id);
        }
        Ok(Self::view(&store, user_id))
    }

    async fn clear(&self, user_id: UserId) -> Result<(), Error> {
        let mut store = self.store.lock()?;
        if let Some(cart_id) = store.active_cart(user_id).map(|cart| cart.id()) {
            store.retain_cart_items(cart_id, |_| false);
        }
        Ok(())
    }

    async fn checkout(&self, user_id: UserId) -> Result<Order, Error> {
        let now = self.clock.utc();
        let mut store = self.store.lock()?;
        let view = Self::view(&store, user_id);
        let cart_id = match store.active_cart(user_id) {
            Some(cart) if !view.items.is_empty() => cart.id(),
            _ => return Err(Error::invalid_request("Cart is empty")),
        };

        if let Some(cart) = store.cart_mut(cart_id) {
            cart.check_out();
        }
        let order_id = store.next_order_id();
        let order = Order::pending(order_id, user_id, view.total, now);
        store.insert_order(order.clone());
        info!(%user_id, %order_id, total = view.total, "cart checked out");
        Ok(order)
    }

    async fn orders(&self, user_id: UserId) -> Result<Vec<Order>, Error> {
        let store = self.store.lock()?;
        Ok(store.orders_by_user(user_id).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::service_test_helpers::{
        HACKATHON, WORKSHOP, fixture_clock, insert_user, seeded_store,
    };
    use crate::domain::{ErrorCode, OrderStatus};
    use rstest::{fixture, rstest};

    struct Harness {
        service: CartService,
        user: UserId,
    }

    #[fixture]
    fn harness() -> Harness {
        let store = seeded_store();
        let user = insert_user(&store, "ada");
        Harness {
            service: CartService::new(store, fixture_clock()),
            user,
        }
    }

    async fn fill(harness: &Harness) {
        for event in [HACKATHON, WORKSHOP] {
            harness
                .service
                .add_item(harness.user, EventId::new(event))
                .await
                .expect("add item");
        }
    }

    #[rstest]
    #[tokio::test]
    async fn total_is_derived_from_items(harness: Harness) {
        fill(&harness).await;
        let view = harness.service.cart(harness.user).await.expect("cart");
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total, 450);
        assert!(view.items.iter().all(|item| item.quantity() == 1));
    }

    #[rstest]
    #[tokio::test]
    async fn cart_without_items_is_empty(harness: Harness) {
        let view = harness.service.cart(harness.user).await.expect("cart");
        assert_eq!(view, CartView::default());
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_item_is_a_conflict(harness: Harness) {
        let event = EventId::new(HACKATHON);
        harness.service.add_item(harness.user, event).await.expect("first");
        let error = harness
            .service
            .add_item(harness.user, event)
            .await
            .expect_err("duplicate");
        assert_eq!(error.code(), ErrorCode::Conflict);
        assert_eq!(error.message(), "Event already in cart");
    }

    #[rstest]
    #[case(Some(99), HACKATHON, "User not found")]
    #[case(None, 99, "Event not found")]
    #[tokio::test]
    async fn add_item_requires_user_and_event(
        harness: Harness,
        #[case] user: Option<u64>,
        #[case] event: u64,
        #[case] message: &str,
    ) {
        let user = user.map_or(harness.user, UserId::new);
        let error = harness
            .service
            .add_item(user, EventId::new(event))
            .await
            .expect_err("missing reference");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), message);
    }

    #[rstest]
    #[tokio::test]
    async fn remove_item_is_idempotent(harness: Harness) {
        fill(&harness).await;
        let view = harness
            .service
            .remove_item(harness.user, EventId::new(HACKATHON))
            .await
            .expect("remove");
        assert_eq!(view.total, 100);

        let again = harness
            .service
            .remove_item(harness.user, EventId::new(HACKATHON))
            .await
            .expect("remove absent item");
        assert_eq!(again, view);
    }

    #[rstest]
    #[tokio::test]
    async fn clear_empties_the_cart(harness: Harness) {
        fill(&harness).await;
        harness.service.clear(harness.user).await.expect("clear");
        let view = harness.service.cart(harness.user).await.expect("cart");
        assert!(view.items.is_empty());
        assert_eq!(view.total, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn checkout_of_empty_cart_is_rejected(harness: Harness) {
        let error = harness
            .service
            .checkout(harness.user)
            .await
            .expect_err("empty cart");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "Cart is empty");
    }

    #[rstest]
    #[tokio::test]
    async fn checkout_creates_pending_order_and_opens_fresh_cart(harness: Harness) {
        fill(&harness).await;
        let order = harness.service.checkout(harness.user).await.expect("checkout");
        assert_eq!(order.total(), 450);
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.payment_id().is_none());

        let view = harness.service.cart(harness.user).await.expect("cart");
        assert!(view.items.is_empty());

        harness
            .service
            .add_item(harness.user, EventId::new(HACKATHON))
            .await
            .expect("hackathon can be added again");
        let orders = harness.service.orders(harness.user).await.expect("orders");
        assert_eq!(orders, vec![order]);
    }
}
