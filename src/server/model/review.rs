//! Review workflow shared by cancellation and prioritization change requests.

use crate::model::api::ReviewDto;

/// Lifecycle of a request awaiting an admin or manager decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Approved => "Aprovada",
            Self::Rejected => "Reprovada",
        }
    }

    /// Status a reviewed request ends in.
    pub fn from_decision(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Rejected
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReviewParam {
    pub approved: bool,
    pub reason: String,
}

impl ReviewParam {
    pub fn from_dto(dto: ReviewDto) -> Self {
        Self {
            approved: dto.approved,
            reason: dto.reason.trim().to_string(),
        }
    }
}
