use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectCommand, PatchProjectError, PatchProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct PatchProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> PatchProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchProjectUseCase for PatchProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        command: PatchProjectCommand,
    ) -> Result<Project, PatchProjectError> {
        self.repository
            .patch_project(project_id, command.into_data())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => PatchProjectError::NotFound,
                ProjectRepositoryError::InvalidDateRange => PatchProjectError::InvalidDateRange,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    PatchProjectError::RepositoryError(msg)
                }
            })
    }
}
