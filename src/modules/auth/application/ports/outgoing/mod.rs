pub mod credential_store;
pub mod password_hasher;
pub mod token_provider;

pub use credential_store::{AdminCredentialStore, CredentialStoreError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
