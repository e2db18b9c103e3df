//! Yapee Storefront
//!
//! Consumer e-commerce storefront in two halves:
//! - a mock catalog/auth API serving fixed in-memory records
//! - a client state store managing cart, session, search and admin views
//!   through a reducer over a tagged action type, with cart/user state
//!   persisted to an injected key-value storage backend
//!
//! ## Features
//! - Product catalog and category listing
//! - Shopping cart with per-user and anonymous scopes
//! - Mock login (no real credential store)
//! - Defensive decode of persisted cart/user data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub mod api;
pub mod catalog;
pub mod storage;
pub mod store;

// =============================================================================
// Core Types
// =============================================================================

/// Catalog product. Immutable once fetched; the client never mutates one.
///
/// Prices are integer minor units of VND. Serialized camelCase to match the
/// storefront wire format. Every field except `id` carries a default so that
/// partially shaped persisted records still decode (see [`store::codec`]).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub sold: u32,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub specifications: HashMap<String, String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// One cart line: an owned copy of the product plus a positive quantity.
///
/// Invariant: `quantity >= 1` while the item is in a cart. An item whose
/// quantity reaches zero is removed, never persisted at zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Line total in minor units.
    pub fn line_total(&self) -> i64 {
        self.product.price * i64::from(self.quantity)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
