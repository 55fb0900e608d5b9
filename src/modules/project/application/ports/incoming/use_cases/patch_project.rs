use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    normalize_images, normalize_technologies, validate_date_range, Project,
};
use crate::modules::project::application::ports::outgoing::PatchProjectData;
use crate::shared::validation::ValidationError;

//
// ──────────────────────────────────────────────────────────
// Patch Project Command
// ──────────────────────────────────────────────────────────
//

/// A date supplied on its own is checked against the stored counterpart by
/// the store, not here.
#[derive(Debug, Clone)]
pub struct PatchProjectCommand {
    data: PatchProjectData,
}

impl PatchProjectCommand {
    pub fn new(data: PatchProjectData) -> Result<Self, ValidationError> {
        validate_date_range(
            data.start_date.as_value().copied(),
            data.end_date.as_value().copied(),
        )?;

        let data = PatchProjectData {
            title: data.title.required_text("title")?,
            description: data.description.required_text("description")?,
            long_description: data.long_description.optional_text(),
            featured_image: data.featured_image.optional_text(),
            images: data.images.null_as_empty().try_map(normalize_images)?,
            technologies: data.technologies.null_as_empty().map(normalize_technologies),
            github_url: data.github_url.optional_text(),
            live_url: data.live_url.optional_text(),
            featured: data.featured.reject_null("featured")?,
            start_date: data.start_date,
            end_date: data.end_date,
            order: data.order.reject_null("order")?,
        };

        Ok(Self { data })
    }

    pub fn data(&self) -> &PatchProjectData {
        &self.data
    }

    pub fn into_data(self) -> PatchProjectData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("startDate must not be after endDate")]
    InvalidDateRange,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        command: PatchProjectCommand,
    ) -> Result<Project, PatchProjectError>;
}
