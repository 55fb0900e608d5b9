use async_trait::async_trait;

use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::incoming::use_cases::{
    GetDevelopersError, GetDevelopersUseCase,
};
use crate::modules::developer::application::ports::outgoing::DeveloperQuery;

pub struct GetDevelopersService<Q>
where
    Q: DeveloperQuery,
{
    query: Q,
}

impl<Q> GetDevelopersService<Q>
where
    Q: DeveloperQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDevelopersUseCase for GetDevelopersService<Q>
where
    Q: DeveloperQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Developer>, GetDevelopersError> {
        self.query
            .list_developers()
            .await
            .map_err(|e| GetDevelopersError::QueryError(e.to_string()))
    }
}
