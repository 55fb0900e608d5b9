use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactCommand, CreateContactError, CreateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;

pub struct CreateContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> CreateContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateContactUseCase for CreateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, command: CreateContactCommand) -> Result<Contact, CreateContactError> {
        let contact = self
            .repository
            .create_contact(command.into_data())
            .await
            .map_err(|e| CreateContactError::RepositoryError(e.to_string()))?;

        info!(contact_id = %contact.id, "Contact message received");
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::ports::outgoing::{
        ContactRepositoryError, CreateContactData, PatchContactData,
    };
    use crate::modules::contact::application::service::test_fixtures::contact_now;
    use uuid::Uuid;

    struct StubRepo {
        fail: bool,
    }

    #[async_trait]
    impl ContactRepository for StubRepo {
        async fn create_contact(
            &self,
            data: CreateContactData,
        ) -> Result<Contact, ContactRepositoryError> {
            if self.fail {
                return Err(ContactRepositoryError::DatabaseError("down".to_string()));
            }
            let mut contact = contact_now(Uuid::new_v4());
            contact.name = data.name;
            contact.subject = data.subject;
            Ok(contact)
        }

        async fn patch_contact(
            &self,
            _contact_id: Uuid,
            _data: PatchContactData,
        ) -> Result<Contact, ContactRepositoryError> {
            unimplemented!()
        }

        async fn delete_contact(&self, _contact_id: Uuid) -> Result<(), ContactRepositoryError> {
            unimplemented!()
        }
    }

    fn command() -> CreateContactCommand {
        CreateContactCommand::new(CreateContactData {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            subject: None,
            message: "hi".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_execute_returns_unread_contact() {
        let service = CreateContactService::new(StubRepo { fail: false });

        let contact = service.execute(command()).await.unwrap();

        assert_eq!(contact.name, "A");
        assert!(!contact.read);
        assert!(!contact.archived);
    }

    #[tokio::test]
    async fn test_execute_maps_repository_error() {
        let service = CreateContactService::new(StubRepo { fail: true });

        let res = service.execute(command()).await;

        assert!(matches!(res, Err(CreateContactError::RepositoryError(_))));
    }
}
