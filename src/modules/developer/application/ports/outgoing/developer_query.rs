// src/modules/developer/application/ports/outgoing/developer_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::developer::application::domain::entities::Developer;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeveloperQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DeveloperQuery: Send + Sync {
    /// Every stored profile, oldest first. Holds zero or one item.
    async fn list_developers(&self) -> Result<Vec<Developer>, DeveloperQueryError>;

    async fn find_developer(
        &self,
        developer_id: Uuid,
    ) -> Result<Option<Developer>, DeveloperQueryError>;
}
