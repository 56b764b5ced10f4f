use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "moc_nap")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Cumulative top-up threshold; unique by business rule, not constraint.
    pub required: i64,
    pub descriptor: Option<String>,
    /// JSON-encoded `RewardItem` list, NULL when the milestone grants nothing.
    pub rewards: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
