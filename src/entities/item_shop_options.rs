use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "item_shop_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_shop_id: i32,
    pub option_id: i32,
    pub param: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
