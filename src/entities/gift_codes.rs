use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "gift_codes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Stored upper-cased; unique case-insensitively.
    pub code: String,
    /// 0 = single-use (one redemption total), 1 = multi-use (once per user).
    #[sea_orm(column_name = "type")]
    pub code_type: i32,
    pub gold: i32,
    pub gem: i32,
    pub ruby: i32,
    /// JSON-encoded `GiftItem` list, NULL when the code grants no items.
    pub items: Option<String>,
    pub status: i32,
    /// Redemption counter, maintained by the game server.
    pub active: i32,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
