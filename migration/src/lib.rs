pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_table_developers;
mod m20250101_000002_create_table_projects;
mod m20250101_000003_create_table_contacts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_table_developers::Migration),
            Box::new(m20250101_000002_create_table_projects::Migration),
            Box::new(m20250101_000003_create_table_contacts::Migration),
        ]
    }
}
