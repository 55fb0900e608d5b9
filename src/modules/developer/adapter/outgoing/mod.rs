mod developer_query_postgres;
mod developer_repository_postgres;
pub mod sea_orm_entity;

pub use developer_query_postgres::DeveloperQueryPostgres;
pub use developer_repository_postgres::DeveloperRepositoryPostgres;
