use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminCredential;
use crate::auth::application::ports::outgoing::credential_store::{
    AdminCredentialStore, CredentialStoreError,
};

/// Single-tenant store holding the admin credential resolved at startup.
#[derive(Debug, Clone)]
pub struct ConfiguredCredentialStore {
    credential: AdminCredential,
}

impl ConfiguredCredentialStore {
    pub fn new(credential: AdminCredential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl AdminCredentialStore for ConfiguredCredentialStore {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminCredential>, CredentialStoreError> {
        if self.credential.principal.email.eq_ignore_ascii_case(email.trim()) {
            Ok(Some(self.credential.clone()))
        } else {
            Ok(None)
        }
    }
}
