//! Cart: ordered line items, unique by product id.

use crate::{CartItem, Product};
use serde::{Deserialize, Serialize};

/// Quantities below one, negative, fractional or non-finite all resolve to
/// zero, which removes the line.
fn clamp_quantity(raw: f64) -> u32 {
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
        return 0;
    }
    raw as u32
}

/// Ordered sequence of cart lines with at most one entry per product id.
/// Serializes transparently as a JSON array of `{product, quantity}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subtotal in minor units.
    pub fn subtotal(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Adds one unit of the product: increments an existing line, otherwise
    /// appends a new line at quantity 1. Always succeeds.
    pub fn add(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity += 1;
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Removes the line with the given product id. Idempotent: removing an
    /// absent id leaves the cart unchanged.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Replaces a line's quantity. The raw quantity is clamped first; a
    /// clamped value of zero removes the line. Absent ids are a no-op.
    pub fn set_quantity(&mut self, product_id: &str, quantity: f64) {
        let quantity = clamp_quantity(quantity);
        if quantity == 0 {
            self.items.retain(|i| i.product.id != product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
