use crate::entities::accounts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row shape for the account table view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountSummary {
    pub id: i32,
    pub username: String,
    pub ban: i32,
    pub is_admin: bool,
    pub vnd: i64,
    pub tongnap: i64,
    pub coin: i64,
    pub create_time: DateTime<Utc>,
    pub last_time_login: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    pub email: Option<String>,
}

impl From<accounts::Model> for AccountSummary {
    fn from(m: accounts::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            ban: m.ban,
            is_admin: m.is_admin,
            vnd: m.vnd,
            tongnap: m.tongnap,
            coin: m.coin,
            create_time: m.create_time,
            last_time_login: m.last_time_login,
            ip_address: m.ip_address,
            email: m.email,
        }
    }
}

/// Extended shape for the single-account view. The password column is
/// deliberately absent from both shapes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountDetail {
    pub id: i32,
    pub username: String,
    pub ban: i32,
    pub is_admin: bool,
    pub vnd: i64,
    pub tongnap: i64,
    pub coin: i64,
    pub tichdiem: i32,
    pub create_time: DateTime<Utc>,
    pub last_time_login: Option<DateTime<Utc>>,
    pub last_time_logout: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    pub email: Option<String>,
    pub gmail: Option<String>,
    pub server_login: Option<String>,
}

impl From<accounts::Model> for AccountDetail {
    fn from(m: accounts::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            ban: m.ban,
            is_admin: m.is_admin,
            vnd: m.vnd,
            tongnap: m.tongnap,
            coin: m.coin,
            tichdiem: m.tichdiem,
            create_time: m.create_time,
            last_time_login: m.last_time_login,
            last_time_logout: m.last_time_logout,
            ip_address: m.ip_address,
            email: m.email,
            gmail: m.gmail,
            server_login: m.server_login,
        }
    }
}

/// Partial update: only supplied fields change.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    pub ban: Option<i32>,
    pub is_admin: Option<bool>,
    pub vnd: Option<i64>,
    pub coin: Option<i64>,
    pub tongnap: Option<i64>,
    pub tichdiem: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AccountListQuery {
    pub page: Option<u64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
    pub search: Option<String>,
    /// Numeric ban state, or "all"/empty for no filter.
    pub ban: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i32>,
}
