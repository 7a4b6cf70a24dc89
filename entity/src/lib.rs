pub mod prelude;

pub mod cancellation_request;
pub mod comment;
pub mod initiative;
pub mod initiative_history;
pub mod prioritization;
pub mod prioritization_change_request;
pub mod sector;
pub mod type_user;
pub mod user;
pub mod user_type;
pub mod user_type_permission;
