use sea_orm::DatabaseConnection;

use crate::server::{
    data::sector::SectorRepository,
    error::AppError,
    model::sector::{CreateSectorParam, Sector, SectorWithUserCount, UpdateSectorParam},
};

const MIN_NAME_LEN: usize = 3;

pub struct SectorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sector with a unique name.
    pub async fn create(&self, param: CreateSectorParam) -> Result<Sector, AppError> {
        if param.name.chars().count() < MIN_NAME_LEN {
            return Err(AppError::bad_request(
                "nome do setor deve ter no mínimo 3 caracteres",
            ));
        }

        let repo = SectorRepository::new(self.db);
        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::bad_request("já existe um setor com este nome"));
        }

        let sector = repo.create(param).await?;

        tracing::info!("Created sector {} ({})", sector.id, sector.name);

        Ok(sector)
    }

    /// Applies a partial update. A new name must stay unique among other sectors.
    pub async fn update(&self, id: i32, param: UpdateSectorParam) -> Result<Sector, AppError> {
        let repo = SectorRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("setor não encontrado"));
        }

        if let Some(name) = &param.name {
            if name.chars().count() < MIN_NAME_LEN {
                return Err(AppError::bad_request(
                    "nome do setor deve ter no mínimo 3 caracteres",
                ));
            }
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::bad_request("já existe um setor com este nome"));
                }
            }
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("setor não encontrado"))
    }

    /// Deletes a sector that has no linked users.
    ///
    /// # Returns
    /// - `Ok(())` - Sector deleted
    /// - `Err(AppError::NotFound)` - No sector with that ID
    /// - `Err(AppError::BadRequest)` - Users still linked; the message carries the count
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SectorRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("setor não encontrado"));
        }

        let user_count = repo.count_users(id).await?;
        if user_count > 0 {
            return Err(AppError::bad_request(format!(
                "não é possível deletar o setor pois existem {} usuário(s) vinculado(s). Remova os usuários primeiro.",
                user_count
            )));
        }

        repo.delete(id).await?;

        tracing::info!("Deleted sector {}", id);

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Sector, AppError> {
        SectorRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("setor não encontrado"))
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<SectorWithUserCount>, AppError> {
        Ok(SectorRepository::new(self.db).get_all(active_only).await?)
    }
}
