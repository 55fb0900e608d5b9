use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactsError, GetContactsUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactQuery;

pub struct GetContactsService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> GetContactsService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContactsUseCase for GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Contact>, GetContactsError> {
        self.query
            .list_contacts()
            .await
            .map_err(|e| GetContactsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::ports::outgoing::ContactQueryError;
    use crate::modules::contact::application::service::test_fixtures::contact_now;
    use uuid::Uuid;

    struct MockContactQuery(Result<Vec<Contact>, ContactQueryError>);

    #[async_trait]
    impl ContactQuery for MockContactQuery {
        async fn list_contacts(&self) -> Result<Vec<Contact>, ContactQueryError> {
            self.0.clone()
        }

        async fn find_contact(
            &self,
            _contact_id: Uuid,
        ) -> Result<Option<Contact>, ContactQueryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_execute_returns_inbox() {
        let service = GetContactsService::new(MockContactQuery(Ok(vec![
            contact_now(Uuid::new_v4()),
            contact_now(Uuid::new_v4()),
        ])));

        assert_eq!(service.execute().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_execute_query_error() {
        let service = GetContactsService::new(MockContactQuery(Err(
            ContactQueryError::DatabaseError("timeout".to_string()),
        )));

        match service.execute().await {
            Err(GetContactsError::QueryFailed(msg)) => assert!(msg.contains("timeout")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
