pub mod auth;
pub mod contact;
pub mod developer;
pub mod project;
