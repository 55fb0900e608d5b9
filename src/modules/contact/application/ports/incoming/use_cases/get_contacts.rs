use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::Contact;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetContactsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Contact>, GetContactsError>;
}
