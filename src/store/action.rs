//! Actions consumed by the store reducer.

use super::Page;
use crate::{Category, Product, User};

/// Tagged action variants. Cart and user variants carry persistence side
/// effects; the rest are pure field replacements.
#[derive(Clone, Debug)]
pub enum Action {
    AddToCart(Product),
    RemoveFromCart(String),
    UpdateCartQuantity { product_id: String, quantity: f64 },
    ClearCart,
    SetUser(Option<User>),
    SetSearchQuery(String),
    SetSelectedCategory(String),
    ToggleAdminMode,
    SetProducts(Vec<Product>),
    SetCategories(Vec<Category>),
    SetLoading(bool),
    SetCurrentPage(Page),
}
