//! Sector domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::sector::{CreateSectorDto, SectorDto, SectorListItemDto, UpdateSectorDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sector {
    pub fn from_entity(entity: entity::sector::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SectorDto {
        SectorDto {
            id: self.id,
            name: self.name,
            description: self.description,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Sector paired with the number of users linked to it, used by listings.
#[derive(Debug, Clone)]
pub struct SectorWithUserCount {
    pub sector: Sector,
    pub user_count: u64,
}

impl SectorWithUserCount {
    pub fn into_dto(self) -> SectorListItemDto {
        SectorListItemDto {
            id: self.sector.id,
            name: self.sector.name,
            description: self.sector.description,
            active: self.sector.active,
            user_count: self.user_count,
            created_at: self.sector.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSectorParam {
    /// Trimmed name.
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

impl CreateSectorParam {
    /// Trims the name and defaults `active` to true.
    pub fn from_dto(dto: CreateSectorDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            active: dto.active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSectorParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl UpdateSectorParam {
    pub fn from_dto(dto: UpdateSectorDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            active: dto.active,
        }
    }
}
