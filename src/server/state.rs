//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for the Gemini API
//! - Loaded settings
//! - Key for the encrypted authentication cookie

use std::sync::Arc;

use cookie::Key;
use sea_orm::DatabaseConnection;

use crate::server::config::Settings;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection pool and `reqwest::Client` share their
/// internals, settings sit behind an `Arc`, and `Key` is a fixed-size value.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests to the text generation API.
    pub http_client: reqwest::Client,

    /// Settings loaded at startup.
    pub settings: Arc<Settings>,

    /// Key encrypting and authenticating the `auth_token` cookie.
    ///
    /// Derived from `security.cookie_encryption_key`, so cookies stay valid across restarts
    /// as long as the configured key is unchanged.
    pub cookie_key: Key,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `settings` - Validated settings
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, settings: Settings) -> Self {
        let cookie_key = Key::derive_from(settings.security.cookie_encryption_key.as_bytes());

        Self {
            db,
            http_client,
            settings: Arc::new(settings),
            cookie_key,
        }
    }
}
