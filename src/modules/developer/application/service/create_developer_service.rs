use async_trait::async_trait;

use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::incoming::use_cases::{
    CreateDeveloperCommand, CreateDeveloperError, CreateDeveloperUseCase,
};
use crate::modules::developer::application::ports::outgoing::{
    DeveloperRepository, DeveloperRepositoryError,
};

pub struct CreateDeveloperService<R>
where
    R: DeveloperRepository,
{
    developer_repository: R,
}

impl<R> CreateDeveloperService<R>
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
impl<R> CreateDeveloperUseCase for CreateDeveloperService<R>
where
    R: DeveloperRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateDeveloperCommand,
    ) -> Result<Developer, CreateDeveloperError> {
        self.developer_repository
            .create_developer(command.into_data())
            .await
            .map_err(|e| match e {
                DeveloperRepositoryError::ProfileAlreadyExists => {
                    CreateDeveloperError::AlreadyExists
                }
                DeveloperRepositoryError::DatabaseError(msg)
                | DeveloperRepositoryError::SerializationError(msg) => {
                    CreateDeveloperError::RepositoryError(msg)
                }
                DeveloperRepositoryError::NotFound => CreateDeveloperError::RepositoryError(
                    "unexpected not found while creating developer".to_string(),
                ),
            })
    }
}
