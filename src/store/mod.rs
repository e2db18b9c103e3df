//! Client state store.
//!
//! A single reducer-managed state object holds cart contents, the
//! authenticated user, UI navigation mode and fetched catalog data. State
//! moves only through [`Action`]s: [`reducer::reduce`] computes the next
//! state as a pure function, and [`Store`] runs the owed persistence effect
//! against an injected [`Storage`] backend in the same dispatch.
//!
//! Two cart scopes live in storage at once, the anonymous (global) cart and
//! a per-user cart; the one matching the active session is authoritative.
//! On login a non-empty global cart migrates into the user's slot and the
//! global slot is deleted. Logout reloads the global slot and leaves the
//! user's slot in storage untouched; there is deliberately no user-to-global
//! migration on the way out.

pub mod action;
pub mod cart;
pub mod codec;
pub mod reducer;

pub use action::Action;
pub use cart::Cart;
pub use reducer::{reduce, Effect};

use crate::storage::{self, Storage};
use crate::{Category, Product, User};

/// Page the client is rendering. Any page is reachable from any other; the
/// admin-mode flag overrides page-based rendering orthogonally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Orders,
    Profile,
    Admin,
    Search,
    Wishlist,
}

/// Aggregate client state. Never persisted as a whole; only the cart and
/// user are written to storage, individually.
#[derive(Clone, Debug)]
pub struct AppState {
    pub cart: Cart,
    pub user: Option<User>,
    pub search_query: String,
    pub selected_category: String,
    pub is_admin_mode: bool,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub loading: bool,
    pub current_page: Page,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cart: Cart::new(),
            user: None,
            search_query: String::new(),
            selected_category: String::new(),
            is_admin_mode: false,
            products: vec![],
            categories: vec![],
            loading: true,
            current_page: Page::Home,
        }
    }
}

/// Reducer-managed store over an injected storage backend.
///
/// Dispatch is synchronous and atomic per action: the pure transition and
/// its persistence effect run back to back in the same call, so no two
/// actions interleave mid-update. Persistence failure degrades to a warning,
/// never to a dispatch error.
pub struct Store<S: Storage> {
    state: AppState,
    storage: S,
}

impl<S: Storage> Store<S> {
    /// Builds a store with state initialized from the backend: the persisted
    /// user first (malformed records mean an anonymous session), then the
    /// cart for that user's scope.
    pub fn new(storage: S) -> Self {
        let user = codec::load_user(&storage);
        let cart = codec::load_cart(&storage, user.as_ref().map(|u| u.id.as_str()));
        let state = AppState {
            cart,
            user,
            ..AppState::default()
        };
        Self { state, storage }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Applies one action: pure transition first, then the owed effect.
    pub fn dispatch(&mut self, action: Action) {
        let (mut next, effect) = reduce(&self.state, action);
        match effect {
            Some(Effect::PersistCart) => {
                let scope = next.user.as_ref().map(|u| u.id.clone());
                self.persist_cart(&next.cart, scope.as_deref());
            }
            Some(Effect::Login(user)) => {
                self.persist_user(&user);
                self.migrate_global_cart(&user.id);
                next.cart = codec::load_cart(&self.storage, Some(&user.id));
            }
            Some(Effect::Logout) => {
                if let Err(err) = self.storage.remove(storage::USER_KEY) {
                    tracing::warn!(%err, "failed to delete persisted user");
                }
                next.cart = codec::load_global_cart(&self.storage);
            }
            None => {}
        }
        self.state = next;
    }

    fn persist_cart(&mut self, cart: &Cart, user_id: Option<&str>) {
        match serde_json::to_string(cart) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(&storage::cart_key(user_id), &raw) {
                    tracing::warn!(%err, "failed to persist cart");
                }
            }
            Err(err) => tracing::warn!(%err, "failed to encode cart"),
        }
    }

    fn persist_user(&mut self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(storage::USER_KEY, &raw) {
                    tracing::warn!(%err, "failed to persist user");
                }
            }
            Err(err) => tracing::warn!(%err, "failed to encode user"),
        }
    }

    /// Moves a non-empty global cart verbatim into the user's slot and
    /// deletes the global slot. Runs only on login.
    fn migrate_global_cart(&mut self, user_id: &str) {
        let global = codec::load_global_cart(&self.storage);
        if global.is_empty() {
            return;
        }
        self.persist_cart(&global, Some(user_id));
        if let Err(err) = self.storage.remove(storage::CART_KEY) {
            tracing::warn!(%err, "failed to delete global cart after migration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::Role;
    use chrono::Utc;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price,
            original_price: None,
            discount: None,
            image: String::new(),
            images: vec![],
            description: String::new(),
            category: "dien-thoai".to_string(),
            brand: "Test".to_string(),
            rating: 4.5,
            review_count: 1,
            sold: 1,
            stock: 10,
            tags: vec![],
            specifications: Default::default(),
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: id.to_string(),
            email: format!("{id}@yapee.vn"),
            name: format!("User {id}"),
            avatar: None,
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_anonymous_cart_persists_to_global_slot() {
        let mut store = Store::new(MemoryStorage::new());
        store.dispatch(Action::AddToCart(product("P1", 100)));
        let raw = store.storage().get(storage::CART_KEY).unwrap().unwrap();
        let persisted = codec::decode_cart(&raw);
        assert_eq!(persisted.item_count(), 1);
        assert_eq!(persisted.items()[0].quantity, 1);
    }

    #[test]
    fn test_login_migrates_global_cart() {
        let mut store = Store::new(MemoryStorage::new());
        store.dispatch(Action::AddToCart(product("P1", 100)));
        store.dispatch(Action::AddToCart(product("P2", 200)));
        store.dispatch(Action::SetUser(Some(user("u1"))));

        assert_eq!(store.state().cart.item_count(), 2);
        assert!(!store.storage().contains(storage::CART_KEY));
        let raw = store
            .storage()
            .get(&storage::cart_key(Some("u1")))
            .unwrap()
            .unwrap();
        assert_eq!(codec::decode_cart(&raw).item_count(), 2);
    }

    #[test]
    fn test_logout_does_not_restore_migrated_cart() {
        let mut store = Store::new(MemoryStorage::new());
        store.dispatch(Action::AddToCart(product("P1", 100)));
        store.dispatch(Action::SetUser(Some(user("u1"))));
        store.dispatch(Action::SetUser(None));

        // The global slot was deleted on login; nothing comes back.
        assert!(store.state().cart.is_empty());
        assert!(store.state().user.is_none());
        assert!(!store.storage().contains(storage::USER_KEY));
        // The user's slot stays in storage untouched.
        assert!(store.storage().contains(&storage::cart_key(Some("u1"))));
    }

    #[test]
    fn test_login_with_empty_global_cart_skips_migration() {
        let mut store = Store::new(MemoryStorage::new());
        store.dispatch(Action::SetUser(Some(user("u1"))));
        assert!(store.state().cart.is_empty());
        assert!(!store.storage().contains(&storage::cart_key(Some("u1"))));
    }

    #[test]
    fn test_login_loads_existing_user_cart() {
        let mut backend = MemoryStorage::new();
        backend
            .set(
                &storage::cart_key(Some("u1")),
                r#"[{"product": {"id": "P7"}, "quantity": 4}]"#,
            )
            .unwrap();
        let mut store = Store::new(backend);
        store.dispatch(Action::SetUser(Some(user("u1"))));
        assert_eq!(store.state().cart.item_count(), 1);
        assert_eq!(store.state().cart.items()[0].quantity, 4);
    }

    #[test]
    fn test_user_scoped_cart_persists_to_user_slot() {
        let mut store = Store::new(MemoryStorage::new());
        store.dispatch(Action::SetUser(Some(user("u1"))));
        store.dispatch(Action::AddToCart(product("P1", 100)));
        assert!(store.storage().contains(&storage::cart_key(Some("u1"))));
        assert!(!store.storage().contains(storage::CART_KEY));
    }

    #[test]
    fn test_full_session_scenario() {
        // Anonymous: P1 twice merges to quantity 2.
        let mut store = Store::new(MemoryStorage::new());
        store.dispatch(Action::AddToCart(product("P1", 100)));
        store.dispatch(Action::AddToCart(product("P1", 100)));
        assert_eq!(store.state().cart.item_count(), 1);
        assert_eq!(store.state().cart.items()[0].quantity, 2);

        // Login: cart migrates, global slot deleted.
        store.dispatch(Action::SetUser(Some(user("u1"))));
        assert_eq!(store.state().cart.items()[0].quantity, 2);
        assert!(!store.storage().contains(storage::CART_KEY));

        // Quantity to zero removes the line.
        store.dispatch(Action::UpdateCartQuantity {
            product_id: "P1".to_string(),
            quantity: 0.0,
        });
        assert!(store.state().cart.is_empty());

        // Logout reloads the now-absent global slot.
        store.dispatch(Action::SetUser(None));
        assert!(store.state().cart.is_empty());
    }

    #[test]
    fn test_initial_state_from_storage() {
        let mut backend = MemoryStorage::new();
        let raw_user = serde_json::to_string(&user("u1")).unwrap();
        backend.set(storage::USER_KEY, &raw_user).unwrap();
        backend
            .set(
                &storage::cart_key(Some("u1")),
                r#"[{"product": {"id": "P1"}, "quantity": 2}]"#,
            )
            .unwrap();

        let store = Store::new(backend);
        assert_eq!(store.state().user.as_ref().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(store.state().cart.items()[0].quantity, 2);
        assert!(store.state().loading);
        assert_eq!(store.state().current_page, Page::Home);
    }

    #[test]
    fn test_initial_state_recovers_from_malformed_records() {
        let mut backend = MemoryStorage::new();
        backend.set(storage::USER_KEY, "not json").unwrap();
        backend.set(storage::CART_KEY, "\"not a cart\"").unwrap();

        let store = Store::new(backend);
        assert!(store.state().user.is_none());
        assert!(store.state().cart.is_empty());
    }
}
