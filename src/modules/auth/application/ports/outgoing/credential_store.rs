use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminCredential;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialStoreError {
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Resolves the admin credential for a login attempt.
///
/// `email` arrives trimmed and lowercased. `None` means no admin uses that
/// address.
#[async_trait]
pub trait AdminCredentialStore: Send + Sync {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminCredential>, CredentialStoreError>;
}
