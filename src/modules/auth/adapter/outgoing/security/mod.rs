pub mod argon2_hasher;
pub mod bcrypt_hasher;
pub mod format_aware_hasher;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;
pub use format_aware_hasher::FormatAwareHasher;
