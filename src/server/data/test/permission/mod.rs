use crate::server::data::permission::PermissionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign_user_type;
mod get_methods_patterns;
