// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_projects(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        let mut query = Entity::find();

        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }

        let projects = query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        projects.into_iter().map(model_to_project).collect()
    }

    async fn find_project(&self, project_id: Uuid) -> Result<Option<Project>, ProjectQueryError> {
        Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_project)
            .transpose()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectQueryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        long_description: model.long_description,
        featured_image: model.featured_image,
        images: from_json(model.images)?,
        technologies: from_json(model.technologies)?,
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

fn from_json<T: serde::de::DeserializeOwned>(
    json: serde_json::Value,
) -> Result<T, ProjectQueryError> {
    serde_json::from_value(json).map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}
