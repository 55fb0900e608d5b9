use async_trait::async_trait;

use crate::modules::developer::application::domain::entities::Developer;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDevelopersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetDevelopersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Developer>, GetDevelopersError>;
}
