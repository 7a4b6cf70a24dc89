//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they care
//! about. Each module has a `Factory` builder for customization and a `create_*` function for
//! the common case. Parent rows are not created implicitly: pass the IDs of rows created by
//! other factories.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let sector = factory::create_sector(&db).await?;
//! let owner = factory::user::UserFactory::new(&db)
//!     .sector_id(sector.id)
//!     .build()
//!     .await?;
//! let initiative = factory::initiative::InitiativeFactory::new(&db, owner.id)
//!     .status("Aprovada")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `sector` - Sectors
//! - `user` - Users
//! - `user_type` - Roles, role membership and role permissions
//! - `initiative` - Initiatives
//! - `history` - Initiative history rows
//! - `comment` - Comments
//! - `cancellation_request` - Cancellation requests
//! - `prioritization` - Prioritizations and change requests
//! - `helpers` - Unique ID generation and multi-row helpers

pub mod cancellation_request;
pub mod comment;
pub mod helpers;
pub mod history;
pub mod initiative;
pub mod prioritization;
pub mod sector;
pub mod user;
pub mod user_type;

pub use cancellation_request::create_cancellation_request;
pub use comment::create_comment;
pub use helpers::create_user_with_role;
pub use initiative::create_initiative;
pub use prioritization::{create_change_request, create_prioritization};
pub use sector::create_sector;
pub use user::create_user;
pub use user_type::{assign_user_type, create_user_type, grant_permission};
