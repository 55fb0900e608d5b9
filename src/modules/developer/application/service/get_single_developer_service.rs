use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::incoming::use_cases::{
    GetSingleDeveloperError, GetSingleDeveloperUseCase,
};
use crate::modules::developer::application::ports::outgoing::DeveloperQuery;

pub struct GetSingleDeveloperService<Q>
where
    Q: DeveloperQuery,
{
    query: Q,
}

impl<Q> GetSingleDeveloperService<Q>
where
    Q: DeveloperQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleDeveloperUseCase for GetSingleDeveloperService<Q>
where
    Q: DeveloperQuery + Send + Sync,
{
    async fn execute(&self, developer_id: Uuid) -> Result<Developer, GetSingleDeveloperError> {
        self.query
            .find_developer(developer_id)
            .await
            .map_err(|e| GetSingleDeveloperError::QueryError(e.to_string()))?
            .ok_or(GetSingleDeveloperError::NotFound)
    }
}
