use crate::entities::{
    item_option_template_entity as option_templates, item_template_entity as item_templates,
    tab_entity as tabs,
};
use crate::error::AppResult;
use crate::models::*;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Read-only lookups over the shop tabs and the item/option reference
/// catalogs. Nothing here mutates.
#[derive(Clone)]
pub struct CatalogService {
    pool: DatabaseConnection,
}

impl CatalogService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn tabs(&self) -> AppResult<Vec<Tab>> {
        let models = tabs::Entity::find()
            .order_by_asc(tabs::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Tab::from).collect())
    }

    /// Resolves templates by explicit id list, or searches by name substring
    /// (numeric terms also match the exact id). Unfiltered lookups are capped;
    /// the catalog holds thousands of rows.
    pub async fn item_templates(&self, query: &ItemTemplateQuery) -> AppResult<Vec<ItemTemplate>> {
        let ids = query
            .ids
            .as_deref()
            .map(super::parse_id_list)
            .filter(|ids| !ids.is_empty());

        let mut finder = item_templates::Entity::find();
        if let Some(ids) = &ids {
            finder = finder.filter(item_templates::Column::Id.is_in(ids.clone()));
        }
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            finder = match search.trim().parse::<i32>() {
                Ok(id) => finder.filter(
                    Condition::any()
                        .add(item_templates::Column::Id.eq(id))
                        .add(item_templates::Column::Name.contains(search)),
                ),
                Err(_) => finder.filter(item_templates::Column::Name.contains(search)),
            };
        }

        finder = finder.order_by_asc(item_templates::Column::Name);
        if ids.is_none() {
            finder = finder.limit(100);
        }

        let models = finder.all(&self.pool).await?;
        Ok(models.into_iter().map(ItemTemplate::from).collect())
    }

    pub async fn item_options(&self) -> AppResult<Vec<ItemOptionTemplate>> {
        let models = option_templates::Entity::find()
            .order_by_asc(option_templates::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(ItemOptionTemplate::from).collect())
    }
}
