//! Item Server
//!
//! CRUD HTTP service for items, persisted in SQLite and fronted by a
//! cache-aside layer (in-process or Redis).

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use item_core::{CacheStore, ItemStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use services::ItemService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, cache: Arc<dyn CacheStore>, strict_cache: bool) -> Self {
        Self {
            items: Arc::new(ItemService::new(store, cache).with_strict_cache(strict_cache)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .merge(item_routes())
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items/",
            get(handlers::items::list).post(handlers::items::create),
        )
        .route(
            "/items",
            get(handlers::items::list).post(handlers::items::create),
        )
        .route(
            "/items/:id",
            get(handlers::items::get)
                .put(handlers::items::update)
                .delete(handlers::items::delete),
        )
}
