use crate::server::data::user::{NewUser, UserRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod email_exists;
mod find_by_email;
mod names_by_ids;
