use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts::{Column, Entity};
use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactQueryError};

#[derive(Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list_contacts(&self) -> Result<Vec<Contact>, ContactQueryError> {
        let contacts = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(contacts.into_iter().map(Into::into).collect())
    }

    async fn find_contact(&self, contact_id: Uuid) -> Result<Option<Contact>, ContactQueryError> {
        let contact = Entity::find_by_id(contact_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(contact.map(Into::into))
    }
}

fn map_db_err(e: DbErr) -> ContactQueryError {
    ContactQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_model(name: &str, minutes_ago: i64) -> contacts::Model {
        let at = (Utc::now() - Duration::minutes(minutes_ago)).fixed_offset();
        contacts::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: "v@example.com".to_string(),
            subject: Some("Hi".to_string()),
            message: "msg".to_string(),
            is_read: false,
            is_archived: false,
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_list_contacts_newest_first_in_sql() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![mock_model("newer", 1), mock_model("older", 60)]])
                .into_connection(),
        );

        let query = ContactQueryPostgres::new(db.clone());
        let contacts = query.list_contacts().await.unwrap();

        assert_eq!(contacts[0].name, "newer");
        assert_eq!(contacts[0].subject.as_deref(), Some("Hi"));

        drop(query);
        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains(r#"ORDER BY "contacts"."created_at" DESC"#));
    }

    #[tokio::test]
    async fn test_find_contact_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<contacts::Model>::new()])
            .into_connection();

        let query = ContactQueryPostgres::new(Arc::new(db));

        assert!(query.find_contact(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_contact_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".to_string())])
            .into_connection();

        let query = ContactQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.find_contact(Uuid::new_v4()).await,
            Err(ContactQueryError::DatabaseError(_))
        ));
    }
}
