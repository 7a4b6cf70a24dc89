use crate::server::data::sector::SectorRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_users;
mod get_all;
