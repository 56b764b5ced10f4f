use crate::entities::{item_shop_options, item_shops};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShopOption {
    pub id: i32,
    pub item_shop_id: i32,
    pub option_id: i32,
    pub param: i32,
}

impl From<item_shop_options::Model> for ShopOption {
    fn from(m: item_shop_options::Model) -> Self {
        Self {
            id: m.id,
            item_shop_id: m.item_shop_id,
            option_id: m.option_id,
            param: m.param,
        }
    }
}

/// Catalog entry with its relational option rows attached.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShopItem {
    pub id: i32,
    pub tab_id: i32,
    pub temp_id: i32,
    pub gold: i32,
    pub gem: i32,
    pub is_new: bool,
    pub is_sell: bool,
    pub item_exchange: i32,
    pub quantity_exchange: i32,
    pub options: Vec<ShopOption>,
}

impl ShopItem {
    pub fn from_parts(m: item_shops::Model, options: Vec<ShopOption>) -> Self {
        Self {
            id: m.id,
            tab_id: m.tab_id,
            temp_id: m.temp_id,
            gold: m.gold,
            gem: m.gem,
            is_new: m.is_new,
            is_sell: m.is_sell,
            item_exchange: m.item_exchange,
            quantity_exchange: m.quantity_exchange,
            options,
        }
    }
}

/// Option line as submitted by the form; lines with option_id 0 are sentinel
/// placeholders and get dropped before insert.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ShopOptionInput {
    pub option_id: i32,
    pub param: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShopItemRequest {
    pub tab_id: Option<i32>,
    pub temp_id: Option<i32>,
    #[serde(default)]
    pub gold: i32,
    #[serde(default)]
    pub gem: i32,
    pub is_new: Option<bool>,
    pub is_sell: Option<bool>,
    pub item_exchange: Option<i32>,
    pub quantity_exchange: Option<i32>,
    #[serde(default)]
    pub options: Vec<ShopOptionInput>,
}

/// Patch body; a supplied `options` list fully replaces the stored rows.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateShopItemRequest {
    pub tab_id: Option<i32>,
    pub temp_id: Option<i32>,
    pub gold: Option<i32>,
    pub gem: Option<i32>,
    pub is_new: Option<bool>,
    pub is_sell: Option<bool>,
    pub item_exchange: Option<i32>,
    pub quantity_exchange: Option<i32>,
    pub options: Option<Vec<ShopOptionInput>>,
}

#[derive(Debug, Deserialize)]
pub struct ShopListQuery {
    pub page: Option<u64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
    /// Numeric tab id, or "all"/empty for no filter.
    #[serde(rename = "tabId")]
    pub tab_id: Option<String>,
    /// "true"/"false", or "all"/empty for no filter.
    #[serde(rename = "isSell")]
    pub is_sell: Option<String>,
    /// Numeric item template id; non-numeric terms match nothing.
    pub search: Option<String>,
}
