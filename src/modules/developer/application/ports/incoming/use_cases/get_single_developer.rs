use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::developer::application::domain::entities::Developer;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleDeveloperError {
    #[error("Developer not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSingleDeveloperUseCase: Send + Sync {
    async fn execute(&self, developer_id: Uuid) -> Result<Developer, GetSingleDeveloperError>;
}
