//! Mock API service: fixed-data HTTP handlers for products, categories and
//! a trivial credential check. Stateless; nothing here mutates anything.

use crate::{catalog, Category, Product, Role, User};
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared handler state: the fixed dataset plus server start time for the
/// health payload.
#[derive(Clone)]
pub struct ApiState {
    products: Arc<Vec<Product>>,
    categories: Arc<Vec<Category>>,
    started_at: Instant,
}

impl ApiState {
    pub fn new() -> Self {
        Self {
            products: Arc::new(catalog::products()),
            categories: Arc::new(catalog::categories()),
            started_at: Instant::now(),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Request/service errors all collapse to a generic 500 with a fixed body;
/// details stay in the log, never in the response.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Internal(err) = &self;
        tracing::error!(%err, "unhandled API error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal server error"})),
        )
            .into_response()
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(api_health))
        .route("/api/products", get(list_products))
        .route("/api/categories", get(list_categories))
        .route("/api/auth/login", post(login))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        "uptime": state.started_at.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn api_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "API healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Filter parameters are accepted and logged but not yet applied; the mock
/// always returns the full dataset.
async fn list_products(
    State(state): State<ApiState>,
    Query(filters): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    tracing::debug!(?filters, "products request");
    Ok(Json(state.products.as_ref().clone()))
}

async fn list_categories(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.as_ref().clone()))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Mock credential check: one special pair yields the admin account, any
/// other input yields a generic user with a derived email.
fn authenticate(username: &str, password: &str) -> User {
    if username == "admin" && password == "admin123" {
        return User {
            id: "admin1".to_string(),
            username: "admin".to_string(),
            email: "admin@yapee.vn".to_string(),
            name: "Admin Yapee".to_string(),
            avatar: None,
            role: Role::Admin,
            created_at: Utc::now(),
        };
    }
    User {
        id: "1".to_string(),
        username: username.to_string(),
        email: format!("{username}@yapee.vn"),
        name: "Nguyễn Văn A".to_string(),
        avatar: None,
        role: Role::User,
        created_at: Utc::now(),
    }
}

async fn login(Json(req): Json<LoginRequest>) -> Result<Json<User>, ApiError> {
    tracing::info!(username = %req.username, "login attempt");
    Ok(Json(authenticate(&req.username, &req.password)))
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    tracing::warn!(%method, path = %uri.path(), "route not found");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "path": uri.path(),
            "method": method.as_str(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(path: &str) -> (StatusCode, Value) {
        let app = router(ApiState::new());
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let app = router(ApiState::new());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_products() {
        let (status, body) = get_json("/api/products").await;
        assert_eq!(status, StatusCode::OK);
        let products = body.as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["id"], "1");
        assert!(products[0]["originalPrice"].is_i64());
    }

    #[tokio::test]
    async fn test_products_ignores_filters() {
        let (status, body) = get_json("/api/products?category=sach&search=x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_categories() {
        let (status, body) = get_json("/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 8);
        assert_eq!(body[0]["slug"], "dien-thoai");
    }

    #[tokio::test]
    async fn test_admin_login() {
        let (status, body) =
            post_json("/api/auth/login", json!({"username": "admin", "password": "admin123"}))
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "admin");
        assert_eq!(body["id"], "admin1");
    }

    #[tokio::test]
    async fn test_generic_login_derives_email() {
        let (status, body) =
            post_json("/api/auth/login", json!({"username": "alice", "password": "whatever"}))
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "user");
        assert_eq!(body["email"], "alice@yapee.vn");
        assert_eq!(body["username"], "alice");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["uptime"].is_u64());

        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "API healthy");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = get_json("/api/orders").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["path"], "/api/orders");
        assert_eq!(body["method"], "GET");
    }
}
