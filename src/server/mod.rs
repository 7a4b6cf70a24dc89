//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, validation and role checks
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Cookie authentication and route permission guard
//! - **Extractors** (`extract`) - `Json`, `Path` and `Query` that reject with the error envelope
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - TOML settings file
//! - **State** (`state`) - Shared application state (DB, HTTP client, settings, cookie key)
//! - **Startup** (`startup`) - Database connection, CORS policy, bootstrap administrator
//! - **Router** (`router`) - Route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; private routes pass through `require_permission`
//! 2. **Middleware** decrypts the `auth_token` cookie, loads the user and checks the
//!    route pattern against the user's role permissions
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** validates input, applies role rules and orchestrates repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO inside the JSON envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
