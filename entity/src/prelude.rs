pub use super::cancellation_request::Entity as CancellationRequest;
pub use super::comment::Entity as Comment;
pub use super::initiative::Entity as Initiative;
pub use super::initiative_history::Entity as InitiativeHistory;
pub use super::prioritization::Entity as Prioritization;
pub use super::prioritization_change_request::Entity as PrioritizationChangeRequest;
pub use super::sector::Entity as Sector;
pub use super::type_user::Entity as TypeUser;
pub use super::user::Entity as User;
pub use super::user_type::Entity as UserType;
pub use super::user_type_permission::Entity as UserTypePermission;
