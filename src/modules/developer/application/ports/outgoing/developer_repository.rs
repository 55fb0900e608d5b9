// src/modules/developer/application/ports/outgoing/developer_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::developer::application::domain::entities::{Developer, Skill, SocialLink};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateDeveloperData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,

    /// Stored as JSONB
    pub social_links: Vec<SocialLink>,

    /// Stored as JSONB
    pub skills: Vec<Skill>,
}

/// Patch semantics:
/// - name/title/bio/email: Unset => keep, Value => replace
/// - phone/address/avatar/resume: Unset => keep, Null => clear, Value => set
/// - social_links/skills: Value(vec) => replace whole array (no merge)
#[derive(Debug, Clone, Default)]
pub struct PatchDeveloperData {
    pub name: PatchField<String>,
    pub title: PatchField<String>,
    pub bio: PatchField<String>,
    pub email: PatchField<String>,
    pub phone: PatchField<String>,
    pub address: PatchField<String>,
    pub avatar: PatchField<String>,
    pub resume: PatchField<String>,
    pub social_links: PatchField<Vec<SocialLink>>,
    pub skills: PatchField<Vec<Skill>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeveloperRepositoryError {
    #[error("Developer not found")]
    NotFound,

    /// The store holds at most one profile.
    #[error("Developer profile already exists")]
    ProfileAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, developers table)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    async fn create_developer(
        &self,
        data: CreateDeveloperData,
    ) -> Result<Developer, DeveloperRepositoryError>;

    /// Patch without pre-read by the use case.
    async fn patch_developer(
        &self,
        developer_id: Uuid,
        data: PatchDeveloperData,
    ) -> Result<Developer, DeveloperRepositoryError>;

    async fn delete_developer(&self, developer_id: Uuid) -> Result<(), DeveloperRepositoryError>;
}
