use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQueryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) | ProjectQueryError::SerializationError(msg) => {
                GetProjectsError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError>;
}
