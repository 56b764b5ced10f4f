use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    /// Game-server credential; never selected into a response model.
    pub password: Option<String>,
    pub ban: i32,
    pub is_admin: bool,
    pub vnd: i64,
    pub coin: i64,
    pub tongnap: i64,
    pub tichdiem: i32,
    pub create_time: DateTime<Utc>,
    pub last_time_login: Option<DateTime<Utc>>,
    pub last_time_logout: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    pub email: Option<String>,
    pub gmail: Option<String>,
    pub server_login: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
