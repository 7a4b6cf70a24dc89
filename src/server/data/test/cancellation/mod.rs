use crate::server::{
    data::cancellation::CancellationRepository, model::review::RequestStatus,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod latest_for_initiatives;
mod review;
