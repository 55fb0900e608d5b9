use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{
    normalize_images, normalize_technologies, validate_date_range, Project,
};
use crate::modules::project::application::ports::outgoing::CreateProjectData;
use crate::shared::validation::{optional_text, required_text, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Create Project Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    data: CreateProjectData,
}

impl CreateProjectCommand {
    pub fn new(data: CreateProjectData) -> Result<Self, ValidationError> {
        validate_date_range(data.start_date, data.end_date)?;

        let data = CreateProjectData {
            title: required_text("title", &data.title)?,
            description: required_text("description", &data.description)?,
            long_description: optional_text(data.long_description),
            featured_image: optional_text(data.featured_image),
            images: normalize_images(data.images)?,
            technologies: normalize_technologies(data.technologies),
            github_url: optional_text(data.github_url),
            live_url: optional_text(data.live_url),
            featured: data.featured,
            start_date: data.start_date,
            end_date: data.end_date,
            order: data.order,
        };

        Ok(Self { data })
    }

    pub fn data(&self) -> &CreateProjectData {
        &self.data
    }

    pub fn into_data(self) -> CreateProjectData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError>;
}
