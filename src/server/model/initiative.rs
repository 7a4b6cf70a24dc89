//! Initiative domain models and parameters.
//!
//! Status, type and priority are stored as their Portuguese display names. The enums below
//! are the closed sets accepted on input; stored rows keep the plain string so listings never
//! fail on legacy values.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::initiative::{
        ChangeStatusDto, CreateInitiativeDto, InitiativeDto, InitiativeFilterQuery,
        InitiativeListItemDto, UpdateInitiativeDto,
    },
    server::{
        model::cancellation::CancellationRequest,
        util::format::{format_date, truncate},
    },
};

/// Listing descriptions are cut to this many characters.
pub const LIST_DESCRIPTION_LEN: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitiativeStatus {
    /// Only used as the `old_status` of the creation history row.
    Draft,
    Submitted,
    InAnalysis,
    Approved,
    InExecution,
    Returned,
    Rejected,
    InHomologation,
    Completed,
    Cancelled,
}

impl InitiativeStatus {
    /// Statuses an administrator may set directly.
    pub const ASSIGNABLE: [InitiativeStatus; 9] = [
        Self::Submitted,
        Self::InAnalysis,
        Self::Approved,
        Self::InExecution,
        Self::Returned,
        Self::Rejected,
        Self::InHomologation,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Statuses whose initiatives can be ranked in a prioritization.
    pub const PRIORITIZABLE: [InitiativeStatus; 3] =
        [Self::Approved, Self::InExecution, Self::InAnalysis];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Rascunho",
            Self::Submitted => "Submetida",
            Self::InAnalysis => "Em Análise",
            Self::Approved => "Aprovada",
            Self::InExecution => "Em Execução",
            Self::Returned => "Devolvida",
            Self::Rejected => "Reprovada",
            Self::InHomologation => "Em Homologação",
            Self::Completed => "Concluída",
            Self::Cancelled => "Cancelada",
        }
    }

    /// Parses an assignable status; `Rascunho` is not accepted.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ASSIGNABLE.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitiativeType {
    Automation,
    Integration,
    Improvement,
    NewProject,
}

impl InitiativeType {
    pub const ALL: [InitiativeType; 4] = [
        Self::Automation,
        Self::Integration,
        Self::Improvement,
        Self::NewProject,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automation => "Automação",
            Self::Integration => "Integração",
            Self::Improvement => "Melhoria",
            Self::NewProject => "Novo Projeto",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitiativePriority {
    High,
    Medium,
    Low,
}

impl InitiativePriority {
    pub const ALL: [InitiativePriority; 3] = [Self::High, Self::Medium, Self::Low];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Média",
            Self::Low => "Baixa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Initiative with owner and sector names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Initiative {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub status: String,
    pub kind: String,
    pub priority: String,
    pub sector_id: Option<i32>,
    pub sector_name: Option<String>,
    pub owner_id: i32,
    pub owner_name: String,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Most recent cancellation request, attached by the service for detail and list views.
    pub cancellation_request: Option<CancellationRequest>,
}

impl Initiative {
    /// Converts an entity model plus resolved names into a domain model.
    ///
    /// # Arguments
    /// - `entity` - Initiative row
    /// - `owner_name` - Name of the owning user
    /// - `sector_name` - Name of the linked sector, if any
    pub fn from_entity(
        entity: entity::initiative::Model,
        owner_name: String,
        sector_name: Option<String>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            benefits: entity.benefits,
            status: entity.status,
            kind: entity.kind,
            priority: entity.priority,
            sector_id: entity.sector_id,
            sector_name,
            owner_id: entity.owner_id,
            owner_name,
            deadline: entity.deadline,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            cancellation_request: None,
        }
    }

    pub fn has_status(&self, status: InitiativeStatus) -> bool {
        self.status == status.as_str()
    }

    pub fn into_dto(self) -> InitiativeDto {
        InitiativeDto {
            id: self.id,
            title: self.title,
            description: self.description,
            benefits: self.benefits,
            status: self.status,
            kind: self.kind,
            priority: self.priority,
            sector_id: self.sector_id,
            sector: self.sector_name,
            owner_id: self.owner_id,
            owner_name: self.owner_name,
            deadline: self.deadline,
            created_at: self.created_at,
            updated_at: self.updated_at,
            cancellation_request: self
                .cancellation_request
                .map(CancellationRequest::into_info_dto),
        }
    }

    /// Converts to the compact listing row with truncated description and display date.
    pub fn into_list_item_dto(self) -> InitiativeListItemDto {
        InitiativeListItemDto {
            id: self.id,
            title: self.title,
            description: truncate(&self.description, LIST_DESCRIPTION_LEN),
            status: self.status,
            kind: self.kind,
            priority: self.priority,
            sector_id: self.sector_id,
            sector: self.sector_name,
            owner_id: self.owner_id,
            owner_name: self.owner_name,
            date: format_date(self.created_at),
            cancellation_request: self
                .cancellation_request
                .map(CancellationRequest::into_info_dto),
        }
    }
}

/// Optional listing filters, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct InitiativeFilter {
    /// Case-insensitive substring of title or description.
    pub search: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub priority: Option<String>,
    /// Exact sector name.
    pub sector: Option<String>,
    pub sector_id: Option<i32>,
    pub owner_id: Option<i32>,
}

impl InitiativeFilter {
    /// Builds a filter from query parameters, dropping blank values.
    pub fn from_query(query: InitiativeFilterQuery) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            search: non_blank(query.search),
            status: non_blank(query.status),
            kind: non_blank(query.kind),
            priority: non_blank(query.priority),
            sector: non_blank(query.sector),
            sector_id: query.sector_id,
            owner_id: None,
        }
    }

    pub fn by_owner(owner_id: i32) -> Self {
        Self {
            owner_id: Some(owner_id),
            ..Default::default()
        }
    }

    pub fn by_status(status: InitiativeStatus) -> Self {
        Self {
            status: Some(status.as_str().to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInitiativeParam {
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub kind: String,
    pub priority: String,
    pub sector_id: Option<i32>,
    pub deadline: Option<String>,
}

impl CreateInitiativeParam {
    pub fn from_dto(dto: CreateInitiativeDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description.trim().to_string(),
            benefits: dto.benefits.trim().to_string(),
            kind: dto.kind,
            priority: dto.priority,
            sector_id: dto.sector_id,
            deadline: dto.deadline,
        }
    }
}

/// Validated insert values handed to the repository.
#[derive(Debug, Clone)]
pub struct NewInitiative {
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub status: InitiativeStatus,
    pub kind: InitiativeType,
    pub priority: InitiativePriority,
    pub sector_id: Option<i32>,
    pub owner_id: i32,
    pub deadline: Option<NaiveDate>,
}

/// Partial update; `None` leaves the field untouched. An empty `deadline` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateInitiativeParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub benefits: Option<String>,
    pub kind: Option<String>,
    pub priority: Option<String>,
    pub sector_id: Option<i32>,
    pub deadline: Option<String>,
}

impl UpdateInitiativeParam {
    pub fn from_dto(dto: UpdateInitiativeDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            benefits: dto.benefits.map(|b| b.trim().to_string()),
            kind: dto.kind,
            priority: dto.priority,
            sector_id: dto.sector_id,
            deadline: dto.deadline,
        }
    }
}

/// Validated update values handed to the repository.
#[derive(Debug, Clone, Default)]
pub struct InitiativeChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub benefits: Option<String>,
    pub kind: Option<InitiativeType>,
    pub priority: Option<InitiativePriority>,
    pub sector_id: Option<i32>,
    /// `Some(None)` clears the deadline.
    pub deadline: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone)]
pub struct ChangeStatusParam {
    pub status: String,
    pub reason: String,
}

impl ChangeStatusParam {
    pub fn from_dto(dto: ChangeStatusDto) -> Self {
        Self {
            status: dto.status,
            reason: dto.reason.trim().to_string(),
        }
    }
}
