use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetSingleContactError, GetSingleContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactQuery;

pub struct GetSingleContactService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> GetSingleContactService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleContactUseCase for GetSingleContactService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self, contact_id: Uuid) -> Result<Contact, GetSingleContactError> {
        self.query
            .find_contact(contact_id)
            .await
            .map_err(|e| GetSingleContactError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleContactError::NotFound)
    }
}
