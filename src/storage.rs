//! Injected key-value storage capability.
//!
//! The client state store persists cart and user records through this trait
//! rather than a concrete backend, so reducer logic stays testable. String
//! keys, string values; the layout mirrors the browser origin storage the
//! storefront started with:
//!
//! ```text
//! yapee_user           -> serialized User, absent when anonymous
//! yapee_cart           -> serialized global (anonymous) cart
//! yapee_cart_{userId}  -> serialized per-user cart
//! ```

use crate::Result;
use std::collections::HashMap;

pub const USER_KEY: &str = "yapee_user";
pub const CART_KEY: &str = "yapee_cart";

/// Storage key for a cart scope: the per-user slot when a user id is given,
/// the global (anonymous) slot otherwise.
pub fn cart_key(user_id: Option<&str>) -> String {
    match user_id {
        Some(id) => format!("{CART_KEY}_{id}"),
        None => CART_KEY.to_string(),
    }
}

/// Key-value storage with get/set/remove. Implementations may fail (a real
/// backend can be full or unreachable); the store treats persistence failure
/// as degrade-and-continue, never as a dispatch error.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// HashMap-backed storage. Infallible; the default backend for tests and
/// in-process use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_key_scopes() {
        assert_eq!(cart_key(None), "yapee_cart");
        assert_eq!(cart_key(Some("u1")), "yapee_cart_u1");
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));
        storage.remove("k").unwrap();
        assert!(!storage.contains("k"));
    }
}
