//! Defensive decode of persisted cart and user records.
//!
//! Persisted data is untrusted: a cart value that is not a JSON array decodes
//! to the empty cart, malformed entries within an array are dropped one by
//! one, and a user record that fails to parse means an anonymous session.
//! Nothing here returns an error to the caller.

use super::Cart;
use crate::storage::{self, Storage};
use crate::{CartItem, User};
use serde_json::Value;

/// Decodes a persisted cart when the value is at least a JSON array.
/// `None` means the value was not an array at all (malformed slot).
fn decode_cart_entries(raw: &str) -> Option<Cart> {
    let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(raw) else {
        return None;
    };
    let items = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<CartItem>(entry).ok())
        .filter(|item| item.quantity >= 1)
        .collect();
    Some(Cart::from_items(items))
}

/// Decodes a persisted cart, substituting the empty cart for anything that
/// is not a well-formed array.
pub fn decode_cart(raw: &str) -> Cart {
    decode_cart_entries(raw).unwrap_or_default()
}

pub fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Reads the persisted user, treating read failures and malformed records as
/// an anonymous session.
pub fn load_user<S: Storage>(store: &S) -> Option<User> {
    match store.get(storage::USER_KEY) {
        Ok(Some(raw)) => decode_user(&raw),
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(%err, "failed to read persisted user");
            None
        }
    }
}

/// Reads the global (anonymous) cart slot.
pub fn load_global_cart<S: Storage>(store: &S) -> Cart {
    match store.get(storage::CART_KEY) {
        Ok(Some(raw)) => decode_cart(&raw),
        Ok(None) => Cart::new(),
        Err(err) => {
            tracing::warn!(%err, "failed to read persisted cart");
            Cart::new()
        }
    }
}

/// Loads the cart for a scope: the per-user slot when a user id is given,
/// falling back to the global slot when that slot is absent or malformed.
pub fn load_cart<S: Storage>(store: &S, user_id: Option<&str>) -> Cart {
    if let Some(id) = user_id {
        match store.get(&storage::cart_key(Some(id))) {
            Ok(Some(raw)) => {
                if let Some(cart) = decode_cart_entries(&raw) {
                    return cart;
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%err, user_id = id, "failed to read user cart");
            }
        }
    }
    load_global_cart(store)
}
