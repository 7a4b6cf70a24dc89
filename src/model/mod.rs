//! Wire-level DTOs for the JSON API.
//!
//! Request bodies, query strings and response payloads exchanged with clients. Server code
//! converts between these and its domain models at the controller boundary.

pub mod ai;
pub mod api;
pub mod auth;
pub mod cancellation;
pub mod comment;
pub mod history;
pub mod initiative;
pub mod prioritization;
pub mod sector;
pub mod user;
