//! Initiative lifecycle: creation, edits, review and status overrides.
//!
//! Every status change writes the new status first and then appends one history row. The two
//! writes are sequential statements; a failure between them leaves the status updated without
//! its history row.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        cancellation::CancellationRepository, history::HistoryRepository,
        initiative::InitiativeRepository,
    },
    error::AppError,
    model::{
        history::CreateHistoryParam,
        initiative::{
            ChangeStatusParam, CreateInitiativeParam, Initiative, InitiativeChanges,
            InitiativeFilter, InitiativePriority, InitiativeStatus, InitiativeType,
            NewInitiative, UpdateInitiativeParam,
        },
        review::ReviewParam,
        user::User,
    },
    util::parse::parse_deadline,
};

const MIN_TITLE_LEN: usize = 5;
const MIN_DESCRIPTION_LEN: usize = 20;
const MIN_BENEFITS_LEN: usize = 10;
const MIN_REVIEW_REASON_LEN: usize = 10;
const MIN_STATUS_REASON_LEN: usize = 5;

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(AppError::bad_request(
            "título deve ter no mínimo 5 caracteres",
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(AppError::bad_request(
            "descrição deve ter no mínimo 20 caracteres",
        ));
    }
    Ok(())
}

fn validate_benefits(benefits: &str) -> Result<(), AppError> {
    if benefits.chars().count() < MIN_BENEFITS_LEN {
        return Err(AppError::bad_request(
            "benefícios devem ter no mínimo 10 caracteres",
        ));
    }
    Ok(())
}

fn parse_kind(kind: &str) -> Result<InitiativeType, AppError> {
    InitiativeType::parse(kind).ok_or_else(|| AppError::bad_request("tipo de iniciativa inválido"))
}

fn parse_priority(priority: &str) -> Result<InitiativePriority, AppError> {
    InitiativePriority::parse(priority).ok_or_else(|| AppError::bad_request("prioridade inválida"))
}

pub struct InitiativeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InitiativeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an initiative owned by `owner` in status `Submetida`.
    ///
    /// Without an explicit `sector_id` the owner's sector is used. Records the creation as a
    /// `Rascunho` → `Submetida` history row.
    ///
    /// # Returns
    /// - `Ok(Initiative)` - Created initiative
    /// - `Err(AppError::BadRequest)` - Validation failed; nothing was written
    pub async fn create(
        &self,
        owner: &User,
        param: CreateInitiativeParam,
    ) -> Result<Initiative, AppError> {
        validate_title(&param.title)?;
        validate_description(&param.description)?;
        validate_benefits(&param.benefits)?;
        let kind = parse_kind(&param.kind)?;
        let priority = parse_priority(&param.priority)?;
        let deadline = parse_deadline(param.deadline.as_deref())?;

        let initiative = InitiativeRepository::new(self.db)
            .create(NewInitiative {
                title: param.title,
                description: param.description,
                benefits: param.benefits,
                status: InitiativeStatus::Submitted,
                kind,
                priority,
                sector_id: param.sector_id.or(owner.sector_id),
                owner_id: owner.id,
                deadline,
            })
            .await?;

        HistoryRepository::new(self.db)
            .create(CreateHistoryParam {
                initiative_id: initiative.id,
                user_id: owner.id,
                old_status: InitiativeStatus::Draft.as_str().to_string(),
                new_status: InitiativeStatus::Submitted.as_str().to_string(),
                reason: "Iniciativa criada".to_string(),
            })
            .await?;

        tracing::info!("User {} created initiative {}", owner.id, initiative.id);

        Ok(initiative)
    }

    /// Applies a partial update. Only the owner or an admin may edit.
    pub async fn update(
        &self,
        id: i32,
        user: &User,
        param: UpdateInitiativeParam,
    ) -> Result<Initiative, AppError> {
        let repo = InitiativeRepository::new(self.db);

        let initiative = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))?;
        if initiative.owner_id != user.id && !user.is_admin() {
            return Err(AppError::forbidden(
                "você não tem permissão para editar esta iniciativa",
            ));
        }

        if let Some(title) = &param.title {
            validate_title(title)?;
        }
        if let Some(description) = &param.description {
            validate_description(description)?;
        }
        if let Some(benefits) = &param.benefits {
            validate_benefits(benefits)?;
        }
        let changes = InitiativeChanges {
            kind: param.kind.as_deref().map(parse_kind).transpose()?,
            priority: param.priority.as_deref().map(parse_priority).transpose()?,
            deadline: match param.deadline.as_deref() {
                Some(raw) => Some(parse_deadline(Some(raw))?),
                None => None,
            },
            title: param.title,
            description: param.description,
            benefits: param.benefits,
            sector_id: param.sector_id,
        };

        repo.update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))
    }

    /// Deletes an initiative with its history, comments and cancellation requests.
    /// Only the owner or an admin may delete.
    pub async fn delete(&self, id: i32, user: &User) -> Result<(), AppError> {
        let repo = InitiativeRepository::new(self.db);

        let initiative = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))?;
        if initiative.owner_id != user.id && !user.is_admin() {
            return Err(AppError::forbidden(
                "você não tem permissão para deletar esta iniciativa",
            ));
        }

        repo.delete(id).await?;

        tracing::info!("User {} deleted initiative {}", user.id, id);

        Ok(())
    }

    /// Gets an initiative with its latest cancellation request.
    pub async fn get_by_id(&self, id: i32) -> Result<Initiative, AppError> {
        let initiative = InitiativeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))?;

        self.attach_cancellations(vec![initiative])
            .await?
            .pop()
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))
    }

    /// Lists initiatives matching `filter`, newest first.
    pub async fn list(&self, filter: &InitiativeFilter) -> Result<Vec<Initiative>, AppError> {
        let initiatives = InitiativeRepository::new(self.db).list(filter).await?;

        self.attach_cancellations(initiatives).await
    }

    /// Lists the initiatives owned by `user`, newest first.
    pub async fn list_mine(&self, user: &User) -> Result<Vec<Initiative>, AppError> {
        self.list(&InitiativeFilter::by_owner(user.id)).await
    }

    /// Lists initiatives awaiting review. Admins and managers only.
    pub async fn list_submitted(&self, user: &User) -> Result<Vec<Initiative>, AppError> {
        if !user.is_admin_or_manager() {
            return Err(AppError::forbidden(
                "apenas administradores e gerentes podem visualizar iniciativas submetidas",
            ));
        }

        self.list(&InitiativeFilter::by_status(InitiativeStatus::Submitted))
            .await
    }

    /// Approves or rejects a submitted initiative.
    ///
    /// # Returns
    /// - `Ok(())` - Status moved to `Aprovada` or `Reprovada` and history appended
    /// - `Err(AppError::Forbidden)` - Reviewer is neither admin nor manager
    /// - `Err(AppError::BadRequest)` - Reason too short or initiative not `Submetida`
    /// - `Err(AppError::NotFound)` - No initiative with that ID
    pub async fn review(
        &self,
        id: i32,
        reviewer: &User,
        param: ReviewParam,
    ) -> Result<(), AppError> {
        if !reviewer.is_admin_or_manager() {
            return Err(AppError::forbidden(
                "apenas administradores e gerentes podem revisar iniciativas",
            ));
        }
        if param.reason.chars().count() < MIN_REVIEW_REASON_LEN {
            return Err(AppError::bad_request(
                "justificativa deve ter no mínimo 10 caracteres",
            ));
        }

        let initiative = InitiativeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))?;
        if !initiative.has_status(InitiativeStatus::Submitted) {
            return Err(AppError::bad_request(
                "apenas iniciativas submetidas podem ser revisadas",
            ));
        }

        let (new_status, reason) = if param.approved {
            (
                InitiativeStatus::Approved,
                format!("✅ Iniciativa aprovada: {}", param.reason),
            )
        } else {
            (
                InitiativeStatus::Rejected,
                format!("❌ Iniciativa reprovada: {}", param.reason),
            )
        };

        self.transition(&initiative, reviewer.id, new_status.as_str(), reason)
            .await
    }

    /// Sets any assignable status. Admins only.
    pub async fn change_status(
        &self,
        id: i32,
        user: &User,
        param: ChangeStatusParam,
    ) -> Result<(), AppError> {
        if !user.is_admin() {
            return Err(AppError::forbidden(
                "apenas administradores podem alterar o status",
            ));
        }
        let status = InitiativeStatus::parse(&param.status)
            .ok_or_else(|| AppError::bad_request("status inválido"))?;
        if param.reason.chars().count() < MIN_STATUS_REASON_LEN {
            return Err(AppError::bad_request(
                "justificativa deve ter no mínimo 5 caracteres",
            ));
        }

        let initiative = InitiativeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("iniciativa não encontrada"))?;

        self.transition(&initiative, user.id, status.as_str(), param.reason)
            .await
    }

    /// Writes the new status, then the history row describing it.
    pub(crate) async fn transition(
        &self,
        initiative: &Initiative,
        user_id: i32,
        new_status: &str,
        reason: String,
    ) -> Result<(), AppError> {
        let updated = InitiativeRepository::new(self.db)
            .update_status(initiative.id, new_status)
            .await?;
        if !updated {
            return Err(AppError::not_found("iniciativa não encontrada"));
        }

        HistoryRepository::new(self.db)
            .create(CreateHistoryParam {
                initiative_id: initiative.id,
                user_id,
                old_status: initiative.status.clone(),
                new_status: new_status.to_string(),
                reason,
            })
            .await?;

        tracing::info!(
            "Initiative {} moved from {} to {} by user {}",
            initiative.id,
            initiative.status,
            new_status,
            user_id
        );

        Ok(())
    }

    async fn attach_cancellations(
        &self,
        mut initiatives: Vec<Initiative>,
    ) -> Result<Vec<Initiative>, AppError> {
        let ids: Vec<i32> = initiatives.iter().map(|i| i.id).collect();
        let mut latest = CancellationRepository::new(self.db)
            .latest_for_initiatives(&ids)
            .await?;

        for initiative in &mut initiatives {
            initiative.cancellation_request = latest.remove(&initiative.id);
        }

        Ok(initiatives)
    }
}
