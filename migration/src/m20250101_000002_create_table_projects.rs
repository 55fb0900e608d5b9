use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager.create_table(projects_table()).await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE projects
                ADD CONSTRAINT chk_projects_date_range
                CHECK (start_date IS NULL OR end_date IS NULL OR start_date <= end_date);
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Public listing order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_sort_order
                ON projects (sort_order, created_at);
                "#,
            )
            .await?;

        // Featured-only listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_featured
                ON projects (sort_order)
                WHERE featured = true;
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
                DROP INDEX IF EXISTS idx_projects_sort_order;
                DROP INDEX IF EXISTS idx_projects_featured;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

fn projects_table() -> TableCreateStatement {
    Table::create()
        .table(Projects::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Projects::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Projects::Title).text().not_null())
        .col(ColumnDef::new(Projects::Description).text().not_null())
        .col(ColumnDef::new(Projects::LongDescription).text())
        .col(ColumnDef::new(Projects::FeaturedImage).text())
        .col(
            ColumnDef::new(Projects::Images)
                .json_binary()
                .not_null()
                .default(Expr::cust("'[]'::jsonb")),
        )
        .col(
            ColumnDef::new(Projects::Technologies)
                .json_binary()
                .not_null()
                .default(Expr::cust("'[]'::jsonb")),
        )
        .col(ColumnDef::new(Projects::GithubUrl).text())
        .col(ColumnDef::new(Projects::LiveUrl).text())
        .col(
            ColumnDef::new(Projects::Featured)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Projects::StartDate).timestamp_with_time_zone())
        .col(ColumnDef::new(Projects::EndDate).timestamp_with_time_zone())
        .col(
            ColumnDef::new(Projects::SortOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Projects::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Projects::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    LongDescription,
    FeaturedImage,
    Images,
    Technologies,
    GithubUrl,
    LiveUrl,
    Featured,
    StartDate,
    EndDate,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
