use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Newest first.
    async fn list_contacts(&self) -> Result<Vec<Contact>, ContactQueryError>;

    async fn find_contact(&self, contact_id: Uuid) -> Result<Option<Contact>, ContactQueryError>;
}
