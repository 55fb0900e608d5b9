use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub long_description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub featured_image: Option<String>,

    /// Array of `ProjectImage`
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    /// Array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,

    pub featured: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub start_date: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub end_date: Option<DateTimeWithTimeZone>,

    /// `order` is reserved in SQL
    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
