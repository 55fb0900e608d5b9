use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            long_description: Set(data.long_description),
            featured_image: Set(data.featured_image),
            images: Set(to_json(&data.images)?),
            technologies: Set(to_json(&data.technologies)?),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            featured: Set(data.featured),
            start_date: Set(data.start_date.map(|d| d.fixed_offset())),
            end_date: Set(data.end_date.map(|d| d.fixed_offset())),
            sort_order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_write_error)?;

        model_to_project(result)
    }

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }

        set_nullable(&mut model.long_description, data.long_description);
        set_nullable(&mut model.featured_image, data.featured_image);
        set_nullable(&mut model.github_url, data.github_url);
        set_nullable(&mut model.live_url, data.live_url);

        if let PatchField::Value(images) = data.images {
            model.images = Set(to_json(&images)?);
        }
        if let PatchField::Value(technologies) = data.technologies {
            model.technologies = Set(to_json(&technologies)?);
        }
        if let PatchField::Value(featured) = data.featured {
            model.featured = Set(featured);
        }

        set_nullable_date(&mut model.start_date, data.start_date);
        set_nullable_date(&mut model.end_date, data.end_date);

        if let PatchField::Value(order) = data.order {
            model.sort_order = Set(order);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.long_description.is_set()
            || model.featured_image.is_set()
            || model.images.is_set()
            || model.technologies.is_set()
            || model.github_url.is_set()
            || model.live_url.is_set()
            || model.featured.is_set()
            || model.start_date.is_set()
            || model.end_date.is_set()
            || model.sort_order.is_set();

        if !has_changes {
            let result = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return model_to_project(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn set_nullable(slot: &mut ActiveValue<Option<String>>, field: PatchField<String>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *slot = Set(None),
        PatchField::Value(v) => *slot = Set(Some(v)),
    }
}

fn set_nullable_date(
    slot: &mut ActiveValue<Option<sea_orm::prelude::DateTimeWithTimeZone>>,
    field: PatchField<DateTime<Utc>>,
) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *slot = Set(None),
        PatchField::Value(d) => *slot = Set(Some(d.fixed_offset())),
    }
}

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        long_description: model.long_description,
        featured_image: model.featured_image,
        images: from_json(&model.images)?,
        technologies: from_json(&model.technologies)?,
        github_url: model.github_url,
        live_url: model.live_url,
        featured: model.featured,
        start_date: model.start_date.map(Into::into),
        end_date: model.end_date.map(Into::into),
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data).map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

/// A patched date can violate the range check against the stored counterpart.
fn map_write_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("chk_projects_date_range") || msg.contains("23514") {
        ProjectRepositoryError::InvalidDateRange
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
