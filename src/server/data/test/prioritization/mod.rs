use crate::server::{
    data::prioritization::PrioritizationRepository,
    error::AppError,
    model::review::RequestStatus,
    service::{conflict_as_bad_request, is_unique_violation, prioritization::ALREADY_PENDING},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod change_request;
mod create;
mod update_order;
