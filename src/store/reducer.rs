//! Pure state transition function.
//!
//! `reduce` computes the next state and, for cart/user actions, names the
//! persistence effect the store wrapper must run afterwards. It never touches
//! storage itself, so every transition is testable without a backend.

use super::{Action, AppState};
use crate::User;

/// Persistence side effect owed after a transition.
#[derive(Clone, Debug)]
pub enum Effect {
    /// Write the cart to the slot matching the (next) session scope.
    PersistCart,
    /// Persist the user, migrate the global cart into their slot, then load
    /// the user-scoped cart into state.
    Login(User),
    /// Delete the persisted user and reload the global cart into state.
    Logout,
}

/// Total mapping from (state, action) to (next state, owed effect).
pub fn reduce(state: &AppState, action: Action) -> (AppState, Option<Effect>) {
    let mut next = state.clone();
    let effect = match action {
        Action::AddToCart(product) => {
            next.cart.add(product);
            Some(Effect::PersistCart)
        }
        Action::RemoveFromCart(product_id) => {
            // Idempotent, and re-persisted even when nothing matched.
            next.cart.remove(&product_id);
            Some(Effect::PersistCart)
        }
        Action::UpdateCartQuantity {
            product_id,
            quantity,
        } => {
            next.cart.set_quantity(&product_id, quantity);
            Some(Effect::PersistCart)
        }
        Action::ClearCart => {
            next.cart.clear();
            Some(Effect::PersistCart)
        }
        Action::SetUser(user) => {
            let effect = match &user {
                Some(user) => Effect::Login(user.clone()),
                None => Effect::Logout,
            };
            next.user = user;
            Some(effect)
        }
        Action::SetSearchQuery(query) => {
            next.search_query = query;
            None
        }
        Action::SetSelectedCategory(category) => {
            next.selected_category = category;
            None
        }
        Action::ToggleAdminMode => {
            next.is_admin_mode = !next.is_admin_mode;
            None
        }
        Action::SetProducts(products) => {
            next.products = products;
            None
        }
        Action::SetCategories(categories) => {
            next.categories = categories;
            None
        }
        Action::SetLoading(loading) => {
            next.loading = loading;
            None
        }
        Action::SetCurrentPage(page) => {
            next.current_page = page;
            None
        }
    };
    (next, effect)
}
