use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::developer::adapter::outgoing::sea_orm_entity::developers::{
    self, Column, Entity,
};
use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::outgoing::{
    DeveloperQuery, DeveloperQueryError,
};

#[derive(Clone)]
pub struct DeveloperQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DeveloperQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeveloperQuery for DeveloperQueryPostgres {
    async fn list_developers(&self) -> Result<Vec<Developer>, DeveloperQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_developer).collect()
    }

    async fn find_developer(
        &self,
        developer_id: Uuid,
    ) -> Result<Option<Developer>, DeveloperQueryError> {
        Entity::find_by_id(developer_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_developer)
            .transpose()
    }
}

fn model_to_developer(model: developers::Model) -> Result<Developer, DeveloperQueryError> {
    Ok(Developer {
        id: model.id,
        name: model.name,
        title: model.title,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        address: model.address,
        avatar: model.avatar,
        resume: model.resume,
        social_links: serde_json::from_value(model.social_links)
            .map_err(|e| DeveloperQueryError::SerializationError(e.to_string()))?,
        skills: serde_json::from_value(model.skills)
            .map_err(|e| DeveloperQueryError::SerializationError(e.to_string()))?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> DeveloperQueryError {
    DeveloperQueryError::DatabaseError(e.to_string())
}
