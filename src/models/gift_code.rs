use crate::entities::gift_codes;
use crate::models::GiftItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored row as returned to the caller. `items` stays the raw JSON text the
/// game server reads; the admin UI decodes it for display.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GiftCode {
    pub id: i64,
    pub code: String,
    #[serde(rename = "type")]
    pub code_type: i32,
    pub gold: i32,
    pub gem: i32,
    pub ruby: i32,
    pub items: Option<String>,
    pub status: i32,
    pub active: i32,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<gift_codes::Model> for GiftCode {
    fn from(m: gift_codes::Model) -> Self {
        Self {
            id: m.id,
            code: m.code,
            code_type: m.code_type,
            gold: m.gold,
            gem: m.gem,
            ruby: m.ruby,
            items: m.items,
            status: m.status,
            active: m.active,
            expires_at: m.expires_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Expiry timestamps arrive as strings so that a bad format can surface as a
/// field-level validation error instead of a body-level deserialize failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGiftCodeRequest {
    pub code: String,
    #[serde(rename = "type")]
    pub code_type: i32,
    #[serde(default)]
    pub gold: i32,
    #[serde(default)]
    pub gem: i32,
    #[serde(default)]
    pub ruby: i32,
    #[serde(default)]
    pub items: Option<Vec<GiftItem>>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Patch body. Nullable columns use a double `Option` so that an absent field
/// (leave unchanged) and an explicit `null` (clear) stay distinguishable.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateGiftCodeRequest {
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub code_type: Option<i32>,
    pub gold: Option<i32>,
    pub gem: Option<i32>,
    pub ruby: Option<i32>,
    #[serde(default, deserialize_with = "crate::utils::double_option")]
    pub items: Option<Option<Vec<GiftItem>>>,
    pub status: Option<i32>,
    #[serde(default, deserialize_with = "crate::utils::double_option")]
    pub expires_at: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct GiftCodeListQuery {
    pub page: Option<u64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
    pub search: Option<String>,
    /// Numeric status, or "all"/empty for no filter.
    pub status: Option<String>,
}
