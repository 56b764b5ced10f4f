use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "item_shop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tab_id: i32,
    /// Item template being sold.
    pub temp_id: i32,
    pub gold: i32,
    pub gem: i32,
    pub is_new: bool,
    pub is_sell: bool,
    /// Alternate purchase currency: item template id, -1 = none.
    pub item_exchange: i32,
    pub quantity_exchange: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
