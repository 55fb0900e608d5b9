use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::developer::adapter::outgoing::sea_orm_entity::developers::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::outgoing::{
    CreateDeveloperData, DeveloperRepository, DeveloperRepositoryError, PatchDeveloperData,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct DeveloperRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DeveloperRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeveloperRepository for DeveloperRepositoryPostgres {
    async fn create_developer(
        &self,
        data: CreateDeveloperData,
    ) -> Result<Developer, DeveloperRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            title: Set(data.title),
            bio: Set(data.bio),
            email: Set(data.email),
            phone: Set(data.phone),
            address: Set(data.address),
            avatar: Set(data.avatar),
            resume: Set(data.resume),
            social_links: Set(to_json(&data.social_links)?),
            skills: Set(to_json(&data.skills)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_insert_error)?;

        model_to_developer(result)
    }

    async fn patch_developer(
        &self,
        developer_id: Uuid,
        data: PatchDeveloperData,
    ) -> Result<Developer, DeveloperRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }
        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(bio) = data.bio {
            model.bio = Set(bio);
        }
        if let PatchField::Value(email) = data.email {
            model.email = Set(email);
        }

        set_nullable(&mut model.phone, data.phone);
        set_nullable(&mut model.address, data.address);
        set_nullable(&mut model.avatar, data.avatar);
        set_nullable(&mut model.resume, data.resume);

        if let PatchField::Value(links) = data.social_links {
            model.social_links = Set(to_json(&links)?);
        }
        if let PatchField::Value(skills) = data.skills {
            model.skills = Set(to_json(&skills)?);
        }

        let has_changes = model.name.is_set()
            || model.title.is_set()
            || model.bio.is_set()
            || model.email.is_set()
            || model.phone.is_set()
            || model.address.is_set()
            || model.avatar.is_set()
            || model.resume.is_set()
            || model.social_links.is_set()
            || model.skills.is_set();

        if !has_changes {
            let result = Entity::find_by_id(developer_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(DeveloperRepositoryError::NotFound)?;

            return model_to_developer(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(developer_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(DeveloperRepositoryError::NotFound)?;

        model_to_developer(result)
    }

    async fn delete_developer(&self, developer_id: Uuid) -> Result<(), DeveloperRepositoryError> {
        let result = Entity::delete_by_id(developer_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(DeveloperRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn set_nullable(slot: &mut sea_orm::ActiveValue<Option<String>>, field: PatchField<String>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *slot = Set(None),
        PatchField::Value(v) => *slot = Set(Some(v)),
    }
}

fn model_to_developer(
    model: developers::Model,
) -> Result<Developer, DeveloperRepositoryError> {
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
        social_links: from_json(&model.social_links)?,
        skills: from_json(&model.skills)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, DeveloperRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| DeveloperRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, DeveloperRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| DeveloperRepositoryError::SerializationError(e.to_string()))
}

/// The singleton index rejects a second profile row.
fn map_insert_error(e: DbErr) -> DeveloperRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && (msg.contains("developers") || msg.contains("singleton"))
    {
        DeveloperRepositoryError::ProfileAlreadyExists
    } else {
        DeveloperRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> DeveloperRepositoryError {
    DeveloperRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
