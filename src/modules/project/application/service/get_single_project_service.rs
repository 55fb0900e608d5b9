use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetSingleProjectError> {
        self.query
            .find_project(project_id)
            .await
            .map_err(|e| GetSingleProjectError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleProjectError::NotFound)
    }
}
