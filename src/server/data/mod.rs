//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each domain
//! in the application. Repositories use SeaORM entity models internally and return domain
//! models with related names already resolved, keeping entity types out of the service layer.
//! Every method returns `Result<_, DbErr>`; business rules live in the services.

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
