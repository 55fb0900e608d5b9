use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts::{
    ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, CreateContactData, PatchContactData,
};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create_contact(
        &self,
        data: CreateContactData,
    ) -> Result<Contact, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            is_read: Set(false),
            is_archived: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn patch_contact(
        &self,
        contact_id: Uuid,
        data: PatchContactData,
    ) -> Result<Contact, ContactRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }
        if let PatchField::Value(email) = data.email {
            model.email = Set(email);
        }
        match data.subject {
            PatchField::Unset => {}
            PatchField::Null => model.subject = Set(None),
            PatchField::Value(subject) => model.subject = Set(Some(subject)),
        }
        if let PatchField::Value(message) = data.message {
            model.message = Set(message);
        }
        if let PatchField::Value(read) = data.read {
            model.is_read = Set(read);
        }
        if let PatchField::Value(archived) = data.archived {
            model.is_archived = Set(archived);
        }

        let has_changes = model.name.is_set()
            || model.email.is_set()
            || model.subject.is_set()
            || model.message.is_set()
            || model.is_read.is_set()
            || model.is_archived.is_set();

        if !has_changes {
            let current = Entity::find_by_id(contact_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ContactRepositoryError::NotFound)?;

            return Ok(current.into());
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(contact_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or(ContactRepositoryError::NotFound)
    }

    async fn delete_contact(&self, contact_id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(contact_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
