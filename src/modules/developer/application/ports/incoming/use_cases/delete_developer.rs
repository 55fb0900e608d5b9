use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteDeveloperError {
    #[error("Developer not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteDeveloperUseCase: Send + Sync {
    async fn execute(&self, developer_id: Uuid) -> Result<(), DeleteDeveloperError>;
}
