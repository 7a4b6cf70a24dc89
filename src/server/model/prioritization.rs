//! Sector prioritization domain models and parameters.
//!
//! A prioritization is a sector's ranked list of initiative IDs for one year. Saving locks
//! it; only an approved change request unlocks it again.

use chrono::{DateTime, Utc};

use crate::{
    model::prioritization::{
        AllPrioritizationsDto, ChangeRequestDto, PrioritizationDto, RequestChangeDto,
        SavePrioritizationDto,
    },
    server::{
        model::initiative::Initiative,
        util::format::{format_timestamp, time_ago},
    },
};

/// Years accepted for a prioritization.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 2020..=2100;

#[derive(Debug, Clone, PartialEq)]
pub struct Prioritization {
    pub id: i32,
    pub sector_id: i32,
    pub sector_name: String,
    pub year: i32,
    pub priority_order: Vec<i32>,
    pub is_locked: bool,
    pub created_by_user_id: i32,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prioritization {
    /// # Arguments
    /// - `entity` - Prioritization row
    /// - `priority_order` - Decoded `priority_order` column
    /// - `sector_name` - Name of the owning sector
    /// - `created_by_name` - Name of the user who first saved it
    pub fn from_entity(
        entity: entity::prioritization::Model,
        priority_order: Vec<i32>,
        sector_name: String,
        created_by_name: String,
    ) -> Self {
        Self {
            id: entity.id,
            sector_id: entity.sector_id,
            sector_name,
            year: entity.year,
            priority_order,
            is_locked: entity.is_locked,
            created_by_user_id: entity.created_by_user_id,
            created_by_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A sector's ranking for a year together with the ranked initiatives.
///
/// `prioritization` is `None` when the sector has not saved one yet; `initiatives` then
/// lists the sector's prioritizable initiatives, newest first.
#[derive(Debug, Clone)]
pub struct PrioritizationView {
    pub sector_id: i32,
    pub sector_name: String,
    pub year: i32,
    pub prioritization: Option<Prioritization>,
    pub initiatives: Vec<Initiative>,
}

impl PrioritizationView {
    pub fn into_dto(self) -> PrioritizationDto {
        let initiatives = self
            .initiatives
            .into_iter()
            .map(Initiative::into_list_item_dto)
            .collect();

        match self.prioritization {
            Some(p) => PrioritizationDto {
                id: p.id,
                sector_id: self.sector_id,
                sector_name: self.sector_name,
                year: self.year,
                priority_order: p.priority_order,
                is_locked: p.is_locked,
                initiatives,
                created_by_user_id: Some(p.created_by_user_id),
                created_by_name: Some(p.created_by_name),
                created_at: Some(format_timestamp(p.created_at)),
                updated_at: Some(format_timestamp(p.updated_at)),
            },
            None => PrioritizationDto {
                id: 0,
                sector_id: self.sector_id,
                sector_name: self.sector_name,
                year: self.year,
                priority_order: Vec::new(),
                is_locked: false,
                initiatives,
                created_by_user_id: None,
                created_by_name: None,
                created_at: None,
                updated_at: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct AllPrioritizations {
    pub year: i32,
    pub sectors: Vec<PrioritizationView>,
}

impl AllPrioritizations {
    pub fn into_dto(self) -> AllPrioritizationsDto {
        AllPrioritizationsDto {
            year: self.year,
            sectors: self
                .sectors
                .into_iter()
                .map(PrioritizationView::into_dto)
                .collect(),
        }
    }
}

/// Proposed reordering of a locked prioritization.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRequest {
    pub id: i32,
    pub prioritization_id: i32,
    pub sector_id: i32,
    pub sector_name: String,
    pub year: i32,
    pub requested_by_user_id: i32,
    pub requested_by_name: String,
    pub new_priority_order: Vec<i32>,
    pub reason: String,
    pub status: String,
    pub reviewed_by_user_id: Option<i32>,
    pub reviewed_by_name: Option<String>,
    pub review_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl ChangeRequest {
    pub fn into_dto(self, now: DateTime<Utc>) -> ChangeRequestDto {
        ChangeRequestDto {
            id: self.id,
            prioritization_id: self.prioritization_id,
            sector_id: self.sector_id,
            sector_name: self.sector_name,
            year: self.year,
            requested_by_user_id: self.requested_by_user_id,
            requested_by_name: self.requested_by_name,
            new_priority_order: self.new_priority_order,
            reason: self.reason,
            status: self.status,
            reviewed_by_user_id: self.reviewed_by_user_id,
            reviewed_by_name: self.reviewed_by_name,
            review_reason: self.review_reason,
            created_at: format_timestamp(self.created_at),
            reviewed_at: self.reviewed_at.map(format_timestamp),
            time_ago: time_ago(self.created_at, now),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SavePrioritizationParam {
    pub year: i32,
    pub priority_order: Vec<i32>,
}

impl SavePrioritizationParam {
    pub fn from_dto(dto: SavePrioritizationDto) -> Self {
        Self {
            year: dto.year,
            priority_order: dto.priority_order,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestChangeParam {
    pub year: i32,
    pub new_priority_order: Vec<i32>,
    pub reason: String,
}

impl RequestChangeParam {
    pub fn from_dto(year: i32, dto: RequestChangeDto) -> Self {
        Self {
            year,
            new_priority_order: dto.new_priority_order,
            reason: dto.reason.trim().to_string(),
        }
    }
}
