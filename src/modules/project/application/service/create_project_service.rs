use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        self.repository
            .create_project(command.into_data())
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}
