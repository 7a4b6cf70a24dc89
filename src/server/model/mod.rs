//! Domain models and operation parameters.
//!
//! Domain models are built from entity rows at the repository boundary and converted to DTOs
//! by controllers. Parameter types carry request data from controllers into services.

pub mod ai;
pub mod cancellation;
pub mod comment;
pub mod history;
pub mod initiative;
pub mod prioritization;
pub mod review;
pub mod role;
pub mod sector;
pub mod user;
