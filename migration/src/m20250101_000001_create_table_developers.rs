use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create developers table
        // =====================================================
        manager.create_table(developers_table()).await?;

        // At most one profile row: every row maps to the same index key.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_developers_singleton
                ON developers ((true));
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
                DROP INDEX IF EXISTS idx_developers_singleton;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Developers::Table).to_owned())
            .await
    }
}

fn developers_table() -> TableCreateStatement {
    Table::create()
        .table(Developers::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Developers::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Developers::Name).text().not_null())
        .col(ColumnDef::new(Developers::Title).text().not_null())
        .col(ColumnDef::new(Developers::Bio).text().not_null())
        .col(ColumnDef::new(Developers::Email).text().not_null())
        .col(ColumnDef::new(Developers::Phone).text())
        .col(ColumnDef::new(Developers::Address).text())
        .col(ColumnDef::new(Developers::Avatar).text())
        .col(ColumnDef::new(Developers::Resume).text())
        .col(
            ColumnDef::new(Developers::SocialLinks)
                .json_binary()
                .not_null()
                .default(Expr::cust("'[]'::jsonb")),
        )
        .col(
            ColumnDef::new(Developers::Skills)
                .json_binary()
                .not_null()
                .default(Expr::cust("'[]'::jsonb")),
        )
        .col(
            ColumnDef::new(Developers::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Developers::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Developers {
    Table,
    Id,
    Name,
    Title,
    Bio,
    Email,
    Phone,
    Address,
    Avatar,
    Resume,
    SocialLinks,
    Skills,
    CreatedAt,
    UpdatedAt,
}
