use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    PatchContactCommand, PatchContactError, PatchContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct PatchContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> PatchContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchContactUseCase for PatchContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        contact_id: Uuid,
        command: PatchContactCommand,
    ) -> Result<Contact, PatchContactError> {
        self.repository
            .patch_contact(contact_id, command.into_data())
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => PatchContactError::NotFound,
                ContactRepositoryError::DatabaseError(msg) => PatchContactError::RepositoryError(msg),
            })
    }
}
