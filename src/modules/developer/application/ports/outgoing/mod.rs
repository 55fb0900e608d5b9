pub mod developer_query;
pub mod developer_repository;

pub use developer_query::{DeveloperQuery, DeveloperQueryError};
pub use developer_repository::{
    CreateDeveloperData, DeveloperRepository, DeveloperRepositoryError, PatchDeveloperData,
};
