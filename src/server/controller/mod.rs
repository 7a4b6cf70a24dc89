//! HTTP request handlers.
//!
//! Each handler extracts request data, converts DTOs into service parameters, calls one
//! service operation and wraps the result in the JSON envelope. Role checks that depend on
//! the target resource live in the services; route-level permissions are enforced by
//! `middleware::permission`.

pub mod ai;
pub mod auth;
pub mod cancellation;
pub mod comment;
pub mod initiative;
pub mod permission;
pub mod prioritization;
pub mod sector;
pub mod user;

#[cfg(test)]
mod test;
