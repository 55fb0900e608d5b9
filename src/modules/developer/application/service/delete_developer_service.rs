use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::developer::application::ports::incoming::use_cases::{
    DeleteDeveloperError, DeleteDeveloperUseCase,
};
use crate::modules::developer::application::ports::outgoing::{
    DeveloperRepository, DeveloperRepositoryError,
};

pub struct DeleteDeveloperService<R>
where
    R: DeveloperRepository,
{
    developer_repository: R,
}

impl<R> DeleteDeveloperService<R>
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
impl<R> DeleteDeveloperUseCase for DeleteDeveloperService<R>
where
    R: DeveloperRepository + Send + Sync,
{
    async fn execute(&self, developer_id: Uuid) -> Result<(), DeleteDeveloperError> {
        self.developer_repository
            .delete_developer(developer_id)
            .await
            .map_err(|e| match e {
                DeveloperRepositoryError::NotFound => DeleteDeveloperError::NotFound,
                other => DeleteDeveloperError::RepositoryError(other.to_string()),
            })
    }
}
