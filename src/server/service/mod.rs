//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Length minimums, enum membership and date formats, with Portuguese
//!   messages surfaced to the client
//! - **Authorization**: Owner, admin and manager checks on the explicitly passed user
//! - **Orchestration**: Coordinating multiple repositories, e.g. a status change plus its
//!   history row

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

pub mod ai;
pub mod auth;
pub mod cancellation;
pub mod comment;
pub mod history;
pub mod initiative;
pub mod permission;
pub mod prioritization;
pub mod sector;
pub mod user;

#[cfg(test)]
mod test;

/// True when the error comes from a unique index, such as the one-pending-request indexes.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Turns a unique-index conflict into a 400 carrying `message`; other errors stay 500s.
pub(crate) fn conflict_as_bad_request(err: DbErr, message: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::bad_request(message)
    } else {
        err.into()
    }
}
