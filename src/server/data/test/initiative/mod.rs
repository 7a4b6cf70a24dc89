use crate::server::{data::initiative::InitiativeRepository, model::initiative::InitiativeFilter};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list;
mod list_by_ids;
