//! In-memory entity store shared by every domain service.
//!
//! [`EntityStore`] owns the keyed collections and the per-kind identifier
//! sequences. It performs no rule checks beyond keeping a team's size in
//! step with its member rows; services hold a [`Store`] guard for the whole
//! of each operation so their read-check-write sequences are atomic.
//!
//! Collections are `BTreeMap`s keyed by identifier, so every listing comes
//! back in identifier order.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::error;

use crate::domain::{
    Cart, CartId, CartItem, CartItemId, Email, Error, Event, EventDefinition, EventId,
    EventValidationError, IdSequence, NewTeamMember, Order, OrderId, Registration, RegistrationId,
    Team, TeamId, TeamMember, TeamMemberId, User, UserId,
};

/// Keyed collections for every entity kind.
#[derive(Debug, Default)]
pub struct EntityStore {
    users: BTreeMap<UserId, User>,
    events: BTreeMap<EventId, Event>,
    registrations: BTreeMap<RegistrationId, Registration>,
    teams: BTreeMap<TeamId, Team>,
    team_members: BTreeMap<TeamMemberId, TeamMember>,
    carts: BTreeMap<CartId, Cart>,
    cart_items: BTreeMap<CartItemId, CartItem>,
    orders: BTreeMap<OrderId, Order>,
    user_ids: IdSequence<UserId>,
    event_ids: IdSequence<EventId>,
    registration_ids: IdSequence<RegistrationId>,
    team_ids: IdSequence<TeamId>,
    team_member_ids: IdSequence<TeamMemberId>,
    cart_ids: IdSequence<CartId>,
    cart_item_ids: IdSequence<CartItemId>,
    order_ids: IdSequence<OrderId>,
}

impl EntityStore {
    /// Seed the catalogue, assigning event identifiers in input order.
    pub fn new(events: Vec<EventDefinition>) -> Result<Self, EventValidationError> {
        let mut store = Self::default();
        for definition in events {
            let id = store.event_ids.next_id();
            let event = Event::try_new(id, definition)?;
            store.events.insert(id, event);
        }
        Ok(store)
    }

    // Users

    /// Reserve the next user identifier.
    pub fn next_user_id(&mut self) -> UserId {
        self.user_ids.next_id()
    }

    /// Look up a user by identifier.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Mutable access to a stored user.
    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Find the user registered under `email`.
    pub fn user_by_email(&self, email: &Email) -> Option<&User> {
        self.users.values().find(|user| user.email() == email)
    }

    /// Store `user`, replacing any row with the same identifier.
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id(), user);
    }

    // Events

    /// Look up a catalogue event.
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    /// Every seeded event in identifier order.
    ///
    /// # Examples
    ///
    /// ```
    /// use backend::domain::{default_catalogue, EntityStore};
    ///
    /// let store = EntityStore::new(default_catalogue()).expect("seed data is valid");
    /// assert_eq!(store.events().count(), default_catalogue().len());
    /// ```
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    // Registrations

    /// Reserve the next registration identifier.
    pub fn next_registration_id(&mut self) -> RegistrationId {
        self.registration_ids.next_id()
    }

    /// The registration for a (user, event) pair, if any.
    pub fn registration_for(&self, user_id: UserId, event_id: EventId) -> Option<&Registration> {
        self.registrations
            .values()
            .find(|reg| reg.user_id() == user_id && reg.event_id() == event_id)
    }

    /// Registrations held by `user_id`, oldest first.
    pub fn registrations_by_user(&self, user_id: UserId) -> impl Iterator<Item = &Registration> {
        self.registrations
            .values()
            .filter(move |reg| reg.user_id() == user_id)
    }

    /// Store a registration.
    pub fn insert_registration(&mut self, registration: Registration) {
        self.registrations.insert(registration.id(), registration);
    }

    // Teams

    /// Reserve the next team identifier.
    pub fn next_team_id(&mut self) -> TeamId {
        self.team_ids.next_id()
    }

    /// Look up a team.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    /// Store a team. Its members are added through `insert_member`.
    pub fn insert_team(&mut self, team: Team) {
        self.teams.insert(team.id(), team);
    }

    /// Teams formed for `event_id`.
    pub fn teams_by_event(&self, event_id: EventId) -> impl Iterator<Item = &Team> {
        self.teams
            .values()
            .filter(move |team| team.event_id() == event_id)
    }

    /// Teams with a member row for `user_id`, led or joined.
    pub fn teams_by_member(&self, user_id: UserId) -> impl Iterator<Item = &Team> {
        self.teams.values().filter(move |team| {
            self.team_members
                .values()
                .any(|row| row.team_id() == team.id() && row.user_id() == user_id)
        })
    }

    /// Member rows of a team in join order.
    pub fn members_of(&self, team_id: TeamId) -> impl Iterator<Item = &TeamMember> {
        self.team_members
            .values()
            .filter(move |row| row.team_id() == team_id)
    }

    /// The member row linking `user_id` to `team_id`.
    pub fn membership(&self, team_id: TeamId, user_id: UserId) -> Option<&TeamMember> {
        self.members_of(team_id).find(|row| row.user_id() == user_id)
    }

    /// Mutable access to a member row.
    pub fn membership_mut(&mut self, team_id: TeamId, user_id: UserId) -> Option<&mut TeamMember> {
        self.team_members
            .values_mut()
            .find(|row| row.team_id() == team_id && row.user_id() == user_id)
    }

    /// Insert a member row and count it against the team.
    ///
    /// This is the only place a team's size grows. Returns `None`, and
    /// inserts nothing, when the team does not exist or has no room.
    pub(crate) fn insert_member(
        &mut self,
        team_id: TeamId,
        user_id: UserId,
        member: NewTeamMember,
        joined_at: DateTime<Utc>,
    ) -> Option<TeamMember> {
        let team = self.teams.get_mut(&team_id).filter(|team| team.has_room())?;
        team.record_join();
        let id = self.team_member_ids.next_id();
        let row = TeamMember::new(id, team_id, user_id, member, joined_at);
        self.team_members.insert(id, row.clone());
        Some(row)
    }

    /// Delete a member row and release its slot.
    pub fn remove_member(&mut self, team_id: TeamId, user_id: UserId) -> Option<TeamMember> {
        let id = self.membership(team_id, user_id)?.id();
        let row = self.team_members.remove(&id)?;
        if let Some(team) = self.teams.get_mut(&team_id) {
            team.record_leave();
        }
        Some(row)
    }

    // Carts

    /// The user's active cart, if one is open.
    pub fn active_cart(&self, user_id: UserId) -> Option<&Cart> {
        self.carts
            .values()
            .find(|cart| cart.user_id() == user_id && cart.is_active())
    }

    /// Return the active cart, opening a new one when none exists.
    pub fn open_cart(&mut self, user_id: UserId, now: DateTime<Utc>) -> CartId {
        if let Some(cart) = self.active_cart(user_id) {
            return cart.id();
        }
        let id = self.cart_ids.next_id();
        self.carts.insert(id, Cart::new(id, user_id, now));
        id
    }

    /// Mutable access to a cart.
    pub fn cart_mut(&mut self, id: CartId) -> Option<&mut Cart> {
        self.carts.get_mut(&id)
    }

    /// Items held in `cart_id`.
    pub fn cart_items(&self, cart_id: CartId) -> impl Iterator<Item = &CartItem> {
        self.cart_items
            .values()
            .filter(move |item| item.cart_id() == cart_id)
    }

    /// Add a single pass for `event_id` to a cart.
    pub fn insert_cart_item(&mut self, cart_id: CartId, event_id: EventId, price: u32) -> CartItem {
        let id = self.cart_item_ids.next_id();
        let item = CartItem::new(id, cart_id, event_id, price);
        self.cart_items.insert(id, item.clone());
        item
    }

    /// Remove every item of `cart_id` matching `keep == false`.
    pub fn retain_cart_items(&mut self, cart_id: CartId, mut keep: impl FnMut(&CartItem) -> bool) {
        self.cart_items
            .retain(|_, item| item.cart_id() != cart_id || keep(item));
    }

    // Orders

    /// Reserve the next order identifier.
    pub fn next_order_id(&mut self) -> OrderId {
        self.order_ids.next_id()
    }

    /// Store an order.
    pub fn insert_order(&mut self, order: Order) {
        self.orders.insert(order.id(), order);
    }

    /// Orders placed by `user_id`, oldest first.
    pub fn orders_by_user(&self, user_id: UserId) -> impl Iterator<Item = &Order> {
        self.orders
            .values()
            .filter(move |order| order.user_id() == user_id)
    }
}

/// Shared handle to the process-wide [`EntityStore`].
///
/// Cloning the handle shares the same store. The guard returned by
/// [`Store::lock`] must not be held across an `.await`.
#[derive(Debug, Clone)]
pub struct Store(Arc<Mutex<EntityStore>>);

impl Store {
    /// Share `store` behind a mutex.
    pub fn new(store: EntityStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    /// Acquire exclusive access for one operation.
    pub fn lock(&self) -> Result<MutexGuard<'_, EntityStore>, Error> {
        self.0.lock().map_err(|_| {
            error!("entity store mutex poisoned");
            Error::internal("entity store unavailable")
        })
    }
}
