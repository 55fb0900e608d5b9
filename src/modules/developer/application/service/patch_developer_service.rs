use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::incoming::use_cases::{
    PatchDeveloperCommand, PatchDeveloperError, PatchDeveloperUseCase,
};
use crate::modules::developer::application::ports::outgoing::{
    DeveloperRepository, DeveloperRepositoryError,
};

pub struct PatchDeveloperService<R>
where
    R: DeveloperRepository,
{
    developer_repository: R,
}

impl<R> PatchDeveloperService<R>
where
    R: DeveloperRepository,
{
    pub fn new(developer_repository: R) -> Self {
        Self {
            developer_repository,
        }
    }
}

#[async_trait]
impl<R> PatchDeveloperUseCase for PatchDeveloperService<R>
where
    R: DeveloperRepository + Send + Sync,
{
    async fn execute(
        &self,
        developer_id: Uuid,
        command: PatchDeveloperCommand,
    ) -> Result<Developer, PatchDeveloperError> {
        self.developer_repository
            .patch_developer(developer_id, command.into_data())
            .await
            .map_err(|e| match e {
                DeveloperRepositoryError::NotFound => PatchDeveloperError::NotFound,
                // Cannot happen on UPDATE, but keep the mapping total
                DeveloperRepositoryError::ProfileAlreadyExists => {
                    PatchDeveloperError::RepositoryError(e.to_string())
                }
                DeveloperRepositoryError::DatabaseError(msg)
                | DeveloperRepositoryError::SerializationError(msg) => {
                    PatchDeveloperError::RepositoryError(msg)
                }
            })
    }
}
