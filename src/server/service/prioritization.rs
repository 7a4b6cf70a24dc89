//! Yearly initiative rankings per sector.
//!
//! Saving a ranking always locks it. Once locked only admins and managers can overwrite it;
//! everybody else has to file a change request, and approving that request unlocks the
//! ranking for the next save.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        initiative::InitiativeRepository, prioritization::PrioritizationRepository,
        sector::SectorRepository,
    },
    error::AppError,
    model::{
        initiative::InitiativeStatus,
        prioritization::{
            AllPrioritizations, ChangeRequest, Prioritization, PrioritizationView,
            RequestChangeParam, SavePrioritizationParam, YEAR_RANGE,
        },
        review::{RequestStatus, ReviewParam},
        user::User,
    },
    service::conflict_as_bad_request,
};

const MIN_REASON_LEN: usize = 10;
const MIN_REVIEW_REASON_LEN: usize = 5;
pub(crate) const ALREADY_PENDING: &str =
    "já existe uma solicitação de mudança pendente para esta priorização";

fn user_sector(user: &User) -> Result<i32, AppError> {
    user.sector_id
        .ok_or_else(|| AppError::bad_request("usuário não está vinculado a um setor"))
}

pub struct PrioritizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrioritizationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves the ranking of the user's sector for a year and locks it.
    ///
    /// # Returns
    /// - `Ok(PrioritizationView)` - Saved ranking with its initiatives
    /// - `Err(AppError::BadRequest)` - Year out of range, empty order, user without sector,
    ///   or ranking locked and user neither admin nor manager
    pub async fn save(
        &self,
        user: &User,
        param: SavePrioritizationParam,
    ) -> Result<PrioritizationView, AppError> {
        if !YEAR_RANGE.contains(&param.year) {
            return Err(AppError::bad_request("ano inválido"));
        }
        if param.priority_order.is_empty() {
            return Err(AppError::bad_request(
                "ordem de prioridade não pode estar vazia",
            ));
        }
        let sector_id = user_sector(user)?;

        let repo = PrioritizationRepository::new(self.db);
        let saved = match repo.find_by_sector_and_year(sector_id, param.year).await? {
            Some(existing) => {
                if existing.is_locked && !user.is_admin_or_manager() {
                    return Err(AppError::bad_request(
                        "priorização já está bloqueada. Solicite aprovação para alterá-la",
                    ));
                }
                repo.update_order(existing.id, &param.priority_order)
                    .await?;
                repo.find_by_id(existing.id)
                    .await?
                    .ok_or_else(|| AppError::not_found("priorização não encontrada"))?
            }
            None => {
                repo.create(sector_id, param.year, &param.priority_order, user.id)
                    .await?
            }
        };

        tracing::info!(
            "User {} saved prioritization of sector {} for {}",
            user.id,
            sector_id,
            param.year
        );

        self.view(saved).await
    }

    /// Gets the ranking of the user's sector for a year.
    ///
    /// When none was saved yet, returns an unlocked view listing the sector's initiatives that
    /// are approved, in execution or in analysis.
    pub async fn get(&self, user: &User, year: i32) -> Result<PrioritizationView, AppError> {
        let sector_id = user_sector(user)?;

        match PrioritizationRepository::new(self.db)
            .find_by_sector_and_year(sector_id, year)
            .await?
        {
            Some(prioritization) => self.view(prioritization).await,
            None => {
                let sector = SectorRepository::new(self.db)
                    .find_by_id(sector_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("setor não encontrado"))?;
                self.empty_view(sector.id, sector.name, year).await
            }
        }
    }

    /// Gets every sector's ranking for a year. Admins and managers only.
    ///
    /// When no sector saved a ranking that year, each active sector is returned with an empty
    /// view instead.
    pub async fn get_all(&self, user: &User, year: i32) -> Result<AllPrioritizations, AppError> {
        if !user.is_admin_or_manager() {
            return Err(AppError::forbidden(
                "apenas administradores e gerentes podem visualizar todas as priorizações",
            ));
        }

        let prioritizations = PrioritizationRepository::new(self.db)
            .get_all_by_year(year)
            .await?;

        let mut sectors = Vec::new();
        if prioritizations.is_empty() {
            for entry in SectorRepository::new(self.db).get_all(true).await? {
                sectors.push(
                    self.empty_view(entry.sector.id, entry.sector.name, year)
                        .await?,
                );
            }
        } else {
            for prioritization in prioritizations {
                sectors.push(self.view(prioritization).await?);
            }
        }

        Ok(AllPrioritizations { year, sectors })
    }

    /// Files a request to change the locked ranking of the user's sector.
    pub async fn request_change(
        &self,
        user: &User,
        param: RequestChangeParam,
    ) -> Result<ChangeRequest, AppError> {
        if param.reason.chars().count() < MIN_REASON_LEN {
            return Err(AppError::bad_request(
                "motivo deve ter no mínimo 10 caracteres",
            ));
        }
        if param.new_priority_order.is_empty() {
            return Err(AppError::bad_request(
                "nova ordem de prioridade não pode estar vazia",
            ));
        }
        let sector_id = user_sector(user)?;

        let repo = PrioritizationRepository::new(self.db);
        let prioritization = repo
            .find_by_sector_and_year(sector_id, param.year)
            .await?
            .ok_or_else(|| AppError::not_found("priorização não encontrada"))?;

        if repo.has_pending_change_request(prioritization.id).await? {
            return Err(AppError::bad_request(ALREADY_PENDING));
        }

        let request = repo
            .create_change_request(
                prioritization.id,
                user.id,
                &param.new_priority_order,
                param.reason,
            )
            .await
            .map_err(|err| conflict_as_bad_request(err, ALREADY_PENDING))?;

        tracing::info!(
            "User {} requested change of prioritization {}",
            user.id,
            prioritization.id
        );

        Ok(request)
    }

    /// Approves or rejects a pending change request. Approval unlocks the ranking.
    pub async fn review_change(
        &self,
        id: i32,
        reviewer: &User,
        param: ReviewParam,
    ) -> Result<(), AppError> {
        if !reviewer.is_admin_or_manager() {
            return Err(AppError::forbidden(
                "apenas administradores e gerentes podem revisar solicitações",
            ));
        }
        if param.reason.chars().count() < MIN_REVIEW_REASON_LEN {
            return Err(AppError::bad_request(
                "justificativa deve ter no mínimo 5 caracteres",
            ));
        }

        let repo = PrioritizationRepository::new(self.db);
        let request = repo
            .find_change_request(id)
            .await?
            .ok_or_else(|| AppError::not_found("solicitação não encontrada"))?;
        if request.status != RequestStatus::Pending.as_str() {
            return Err(AppError::bad_request("esta solicitação já foi revisada"));
        }

        let status = RequestStatus::from_decision(param.approved);
        if !repo
            .review_change_request(id, status, reviewer.id, &param.reason)
            .await?
        {
            return Err(AppError::bad_request("esta solicitação já foi revisada"));
        }

        if param.approved {
            repo.unlock(request.prioritization_id).await?;
        }

        tracing::info!(
            "User {} reviewed change request {}: {}",
            reviewer.id,
            id,
            status.as_str()
        );

        Ok(())
    }

    /// Lists pending change requests, newest first. Admins and managers only.
    pub async fn list_pending_change_requests(
        &self,
        user: &User,
    ) -> Result<Vec<ChangeRequest>, AppError> {
        if !user.is_admin_or_manager() {
            return Err(AppError::forbidden(
                "apenas administradores e gerentes podem visualizar solicitações",
            ));
        }

        Ok(PrioritizationRepository::new(self.db)
            .list_pending_change_requests()
            .await?)
    }

    /// Loads the ranked initiatives, skipping IDs that no longer exist.
    async fn view(&self, prioritization: Prioritization) -> Result<PrioritizationView, AppError> {
        let initiatives = InitiativeRepository::new(self.db)
            .list_by_ids(&prioritization.priority_order)
            .await?;

        Ok(PrioritizationView {
            sector_id: prioritization.sector_id,
            sector_name: prioritization.sector_name.clone(),
            year: prioritization.year,
            prioritization: Some(prioritization),
            initiatives,
        })
    }

    async fn empty_view(
        &self,
        sector_id: i32,
        sector_name: String,
        year: i32,
    ) -> Result<PrioritizationView, AppError> {
        let statuses = InitiativeStatus::PRIORITIZABLE.map(InitiativeStatus::as_str);
        let initiatives = InitiativeRepository::new(self.db)
            .list_by_sector_and_statuses(sector_id, &statuses)
            .await?;

        Ok(PrioritizationView {
            sector_id,
            sector_name,
            year,
            prioritization: None,
            initiatives,
        })
    }
}
