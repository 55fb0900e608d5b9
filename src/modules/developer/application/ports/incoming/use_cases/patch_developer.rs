use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::developer::application::domain::entities::{
    normalize_skills, normalize_social_links, Developer,
};
use crate::modules::developer::application::ports::outgoing::PatchDeveloperData;
use crate::shared::validation::ValidationError;

//
// ──────────────────────────────────────────────────────────
// Patch Developer Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct PatchDeveloperCommand {
    data: PatchDeveloperData,
}

impl PatchDeveloperCommand {
    pub fn new(data: PatchDeveloperData) -> Result<Self, ValidationError> {
        let data = PatchDeveloperData {
            name: data.name.required_text("name")?,
            title: data.title.required_text("title")?,
            bio: data.bio.required_text("bio")?,
            email: data.email.email("email")?,
            phone: data.phone.optional_text(),
            address: data.address.optional_text(),
            avatar: data.avatar.optional_text(),
            resume: data.resume.optional_text(),
            social_links: data
                .social_links
                .null_as_empty()
                .try_map(normalize_social_links)?,
            skills: data.skills.null_as_empty().try_map(normalize_skills)?,
        };

        Ok(Self { data })
    }

    pub fn data(&self) -> &PatchDeveloperData {
        &self.data
    }

    pub fn into_data(self) -> PatchDeveloperData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchDeveloperError {
    #[error("Developer not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchDeveloperUseCase: Send + Sync {
    async fn execute(
        &self,
        developer_id: Uuid,
        command: PatchDeveloperCommand,
    ) -> Result<Developer, PatchDeveloperError>;
}
