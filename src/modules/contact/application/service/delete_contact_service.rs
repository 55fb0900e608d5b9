use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactError, DeleteContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct DeleteContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> DeleteContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteContactUseCase for DeleteContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, contact_id: Uuid) -> Result<(), DeleteContactError> {
        self.repository
            .delete_contact(contact_id)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => DeleteContactError::NotFound,
                other => DeleteContactError::RepositoryError(other.to_string()),
            })
    }
}
