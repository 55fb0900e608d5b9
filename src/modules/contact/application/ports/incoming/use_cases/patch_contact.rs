use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::outgoing::PatchContactData;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone)]
pub struct PatchContactCommand {
    data: PatchContactData,
}

impl PatchContactCommand {
    pub fn new(data: PatchContactData) -> Result<Self, ValidationError> {
        let data = PatchContactData {
            name: data.name.required_text("name")?,
            email: data.email.email("email")?,
            subject: data.subject.optional_text(),
            message: data.message.required_text("message")?,
            read: data.read.reject_null("read")?,
            archived: data.archived.reject_null("archived")?,
        };

        Ok(Self { data })
    }

    pub fn data(&self) -> &PatchContactData {
        &self.data
    }

    pub fn into_data(self) -> PatchContactData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchContactUseCase: Send + Sync {
    async fn execute(
        &self,
        contact_id: Uuid,
        command: PatchContactCommand,
    ) -> Result<Contact, PatchContactError>;
}
