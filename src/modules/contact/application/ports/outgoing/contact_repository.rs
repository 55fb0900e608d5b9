use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// New inbox entry. Always stored unread and unarchived.
#[derive(Debug, Clone, Default)]
pub struct CreateContactData {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct PatchContactData {
    pub name: PatchField<String>,
    pub email: PatchField<String>,
    pub subject: PatchField<String>,
    pub message: PatchField<String>,
    pub read: PatchField<bool>,
    pub archived: PatchField<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, data: CreateContactData)
        -> Result<Contact, ContactRepositoryError>;

    async fn patch_contact(
        &self,
        contact_id: Uuid,
        data: PatchContactData,
    ) -> Result<Contact, ContactRepositoryError>;

    async fn delete_contact(&self, contact_id: Uuid) -> Result<(), ContactRepositoryError>;
}
