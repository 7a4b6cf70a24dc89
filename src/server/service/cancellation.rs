use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cancellation::CancellationRepository, initiative::InitiativeRepository},
    error::AppError,
    model::{
        cancellation::{CancellationRequest, CreateCancellationParam},
        history::CreateHistoryParam,
        initiative::InitiativeStatus,
        review::{RequestStatus, ReviewParam},
        user::User,
    },
    service::{conflict_as_bad_request, history::HistoryService, initiative::InitiativeService},
};

const MIN_REASON_LEN: usize = 10;
const MIN_REVIEW_REASON_LEN: usize = 5;
pub(crate) const ALREADY_PENDING: &str =
    "já existe uma solicitação de cancelamento pendente para esta iniciativa";

/// Cancellation requests and their review by admins and managers.
pub struct CancellationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CancellationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a cancellation request for an initiative.
    ///
    /// The initiative status does not change. A history row noting the request is appended;
    /// if that write fails it is logged and the request still succeeds.
    ///
    /// # Returns
    /// - `Ok(CancellationRequest)` - Pending request
    /// - `Err(AppError::NotFound)` - No initiative with that ID
    /// - `Err(AppError::BadRequest)` - Reason too short, initiative already cancelled, or a
    ///   request is already pending
    pub async fn request(
        &self,
        initiative_id: i32,
        user: &User,
        reason: &str,
    ) -> Result<CancellationRequest, AppError> {
        let reason = reason.trim();
        if reason.chars().count() < MIN_REASON_LEN {
            return Err(AppError::bad_request(
                "motivo deve ter no mínimo 10 caracteres",
            ));
        }

        let initiative = InitiativeRepository::new(self.db)
            .find_by_id(initiative_id)
            .await?
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))?;
        if initiative.has_status(InitiativeStatus::Cancelled) {
            return Err(AppError::bad_request("iniciativa já está cancelada"));
        }

        let repo = CancellationRepository::new(self.db);
        if repo.has_pending(initiative_id).await? {
            return Err(AppError::bad_request(ALREADY_PENDING));
        }

        let request = repo
            .create(CreateCancellationParam {
                initiative_id,
                requested_by_user_id: user.id,
                reason: reason.to_string(),
            })
            .await
            .map_err(|err| conflict_as_bad_request(err, ALREADY_PENDING))?;

        HistoryService::new(self.db)
            .record_or_log(CreateHistoryParam {
                initiative_id,
                user_id: user.id,
                old_status: initiative.status.clone(),
                new_status: initiative.status,
                reason: format!("⚠️ Solicitação de cancelamento criada: {}", reason),
            })
            .await;

        tracing::info!(
            "User {} requested cancellation of initiative {}",
            user.id,
            initiative_id
        );

        Ok(request)
    }

    /// Approves or rejects a pending cancellation request.
    ///
    /// Approval moves the initiative to `Cancelada`. Rejection leaves it untouched and only
    /// records the decision in the history, logging a failed history write.
    pub async fn review(
        &self,
        id: i32,
        reviewer: &User,
        param: ReviewParam,
    ) -> Result<(), AppError> {
        if !reviewer.is_admin_or_manager() {
            return Err(AppError::forbidden(
                "apenas administradores e gerentes podem revisar solicitações de cancelamento",
            ));
        }
        if param.reason.chars().count() < MIN_REVIEW_REASON_LEN {
            return Err(AppError::bad_request(
                "justificativa deve ter no mínimo 5 caracteres",
            ));
        }

        let repo = CancellationRepository::new(self.db);
        let request = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("solicitação de cancelamento não encontrada"))?;
        if request.status != RequestStatus::Pending.as_str() {
            return Err(AppError::bad_request("esta solicitação já foi revisada"));
        }

        let initiative = InitiativeRepository::new(self.db)
            .find_by_id(request.initiative_id)
            .await?
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))?;

        let status = RequestStatus::from_decision(param.approved);
        if !repo.review(id, status, reviewer.id, &param.reason).await? {
            return Err(AppError::bad_request("esta solicitação já foi revisada"));
        }

        if param.approved {
            InitiativeService::new(self.db)
                .transition(
                    &initiative,
                    reviewer.id,
                    InitiativeStatus::Cancelled.as_str(),
                    format!("✅ Cancelamento aprovado: {}", param.reason),
                )
                .await?;
        } else {
            HistoryService::new(self.db)
                .record_or_log(CreateHistoryParam {
                    initiative_id: initiative.id,
                    user_id: reviewer.id,
                    old_status: initiative.status.clone(),
                    new_status: initiative.status,
                    reason: format!("❌ Solicitação de cancelamento reprovada: {}", param.reason),
                })
                .await;
        }

        tracing::info!(
            "User {} reviewed cancellation request {}: {}",
            reviewer.id,
            id,
            status.as_str()
        );

        Ok(())
    }

    /// Lists pending requests, newest first. Admins and managers only.
    pub async fn list_pending(&self, user: &User) -> Result<Vec<CancellationRequest>, AppError> {
        if !user.is_admin_or_manager() {
            return Err(AppError::forbidden(
                "apenas administradores e gerentes podem visualizar solicitações pendentes",
            ));
        }

        Ok(CancellationRepository::new(self.db).list_pending().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CancellationRequest, AppError> {
        CancellationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("solicitação de cancelamento não encontrada"))
    }
}
