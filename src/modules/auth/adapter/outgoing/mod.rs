pub mod admin_config;
pub mod configured_credential_store;
pub mod jwt;
pub mod security;
