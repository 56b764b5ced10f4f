use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mocnap_claimed")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mocnap_id: i32,
    pub player_id: i32,
    pub claimed_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
