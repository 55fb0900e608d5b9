use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetSingleProjectError>;
}
