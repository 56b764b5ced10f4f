use crate::entities::{item_option_templates, item_templates, tabs};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Tab {
    pub id: i32,
    pub shop_id: i32,
    pub name: String,
}

impl From<tabs::Model> for Tab {
    fn from(m: tabs::Model) -> Self {
        Self {
            id: m.id,
            shop_id: m.shop_id,
            name: m.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemTemplate {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: i32,
    pub icon_id: i32,
    pub description: Option<String>,
}

impl From<item_templates::Model> for ItemTemplate {
    fn from(m: item_templates::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            item_type: m.item_type,
            icon_id: m.icon_id,
            description: m.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemOptionTemplate {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub option_type: i32,
}

impl From<item_option_templates::Model> for ItemOptionTemplate {
    fn from(m: item_option_templates::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            option_type: m.option_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ItemTemplateQuery {
    /// Comma-separated template ids; takes precedence over search.
    pub ids: Option<String>,
    /// Matches the name substring, or the exact id when numeric.
    pub search: Option<String>,
}
