// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    /// `Some(true)` keeps featured projects only, `Some(false)` the rest.
    pub featured: Option<bool>,
}

impl ProjectListFilter {
    pub fn featured_only() -> Self {
        Self {
            featured: Some(true),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
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
pub trait ProjectQuery: Send + Sync {
    /// Ordered by `order` ascending, ties by creation time ascending.
    async fn list_projects(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<Project>, ProjectQueryError>;

    async fn find_project(&self, project_id: Uuid) -> Result<Option<Project>, ProjectQueryError>;
}
