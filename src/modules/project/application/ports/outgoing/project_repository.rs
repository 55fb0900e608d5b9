// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectImage};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub featured_image: Option<String>,

    /// Stored as JSONB
    pub images: Vec<ProjectImage>,

    /// Stored as JSONB
    pub technologies: Vec<String>,

    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub order: i32,
}

/// Patch semantics:
/// - title/description/featured/order: Unset => keep, Value => replace
/// - optional text and dates: Unset => keep, Null => clear, Value => set
/// - images/technologies: Value(vec) => replace whole array
#[derive(Debug, Clone, Default)]
pub struct PatchProjectData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub long_description: PatchField<String>,
    pub featured_image: PatchField<String>,
    pub images: PatchField<Vec<ProjectImage>>,
    pub technologies: PatchField<Vec<String>>,
    pub github_url: PatchField<String>,
    pub live_url: PatchField<String>,
    pub featured: PatchField<bool>,
    pub start_date: PatchField<DateTime<Utc>>,
    pub end_date: PatchField<DateTime<Utc>>,
    pub order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// The stored row would end up with startDate after endDate.
    #[error("startDate must not be after endDate")]
    InvalidDateRange,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, projects table)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: CreateProjectData)
        -> Result<Project, ProjectRepositoryError>;

    /// Patch without pre-read by the use case.
    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
