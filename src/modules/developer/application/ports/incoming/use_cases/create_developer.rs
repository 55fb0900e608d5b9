use async_trait::async_trait;

use crate::modules::developer::application::domain::entities::{
    normalize_skills, normalize_social_links, Developer,
};
use crate::modules::developer::application::ports::outgoing::CreateDeveloperData;
use crate::shared::validation::{email, optional_text, required_text, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Create Developer Command
// ──────────────────────────────────────────────────────────
//

/// Profile data that passed validation. Text is trimmed and blank optional
/// text is dropped.
#[derive(Debug, Clone)]
pub struct CreateDeveloperCommand {
    data: CreateDeveloperData,
}

impl CreateDeveloperCommand {
    pub fn new(data: CreateDeveloperData) -> Result<Self, ValidationError> {
        let data = CreateDeveloperData {
            name: required_text("name", &data.name)?,
            title: required_text("title", &data.title)?,
            bio: required_text("bio", &data.bio)?,
            email: email("email", &data.email)?,
            phone: optional_text(data.phone),
            address: optional_text(data.address),
            avatar: optional_text(data.avatar),
            resume: optional_text(data.resume),
            social_links: normalize_social_links(data.social_links)?,
            skills: normalize_skills(data.skills)?,
        };

        Ok(Self { data })
    }

    pub fn data(&self) -> &CreateDeveloperData {
        &self.data
    }

    pub fn into_data(self) -> CreateDeveloperData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateDeveloperError {
    #[error("Developer profile already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateDeveloperUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateDeveloperCommand,
    ) -> Result<Developer, CreateDeveloperError>;
}
