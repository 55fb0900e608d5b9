use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(contacts_table()).await?;

        // Inbox listing, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_contacts_created_at
                ON contacts (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_contacts_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

fn contacts_table() -> TableCreateStatement {
    Table::create()
        .table(Contacts::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Contacts::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Contacts::Name).text().not_null())
        .col(ColumnDef::new(Contacts::Email).text().not_null())
        .col(ColumnDef::new(Contacts::Subject).text())
        .col(ColumnDef::new(Contacts::Message).text().not_null())
        .col(
            ColumnDef::new(Contacts::IsRead)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Contacts::IsArchived)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Contacts::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Contacts::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    IsRead,
    IsArchived,
    CreatedAt,
    UpdatedAt,
}
