use crate::entities::{item_shop_entity as item_shops, item_shop_option_entity as shop_options};
use crate::error::{AppError, AppResult, FieldError};
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct ShopService {
    pool: DatabaseConnection,
}

impl ShopService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: &ShopListQuery) -> AppResult<PaginatedResponse<ShopItem>> {
        let params = PageRequest::new(query.page, query.page_size);

        let mut finder = item_shops::Entity::find();
        if let Some(tab_id) = super::numeric_filter(query.tab_id.as_deref()) {
            finder = finder.filter(item_shops::Column::TabId.eq(tab_id));
        }
        if let Some(is_sell) = super::bool_filter(query.is_sell.as_deref()) {
            finder = finder.filter(item_shops::Column::IsSell.eq(is_sell));
        }
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            // Search is by item template id; a non-numeric term matches nothing.
            match search.trim().parse::<i32>() {
                Ok(temp_id) => finder = finder.filter(item_shops::Column::TempId.eq(temp_id)),
                Err(_) => return Ok(PaginatedResponse::new(Vec::new(), &params, 0)),
            }
        }

        let total = finder.clone().count(&self.pool).await?;
        let models = finder
            .order_by_desc(item_shops::Column::Id)
            .limit(params.limit())
            .offset(params.offset())
            .all(&self.pool)
            .await?;

        // Hydrate option rows for the whole page with one IN query.
        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut options_by_item: HashMap<i32, Vec<ShopOption>> = HashMap::new();
        if !ids.is_empty() {
            let option_rows = shop_options::Entity::find()
                .filter(shop_options::Column::ItemShopId.is_in(ids))
                .all(&self.pool)
                .await?;
            for row in option_rows {
                options_by_item
                    .entry(row.item_shop_id)
                    .or_default()
                    .push(ShopOption::from(row));
            }
        }

        let items = models
            .into_iter()
            .map(|m| {
                let options = options_by_item.remove(&m.id).unwrap_or_default();
                ShopItem::from_parts(m, options)
            })
            .collect();
        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get(&self, id: i32) -> AppResult<ShopItem> {
        let item = item_shops::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Shop item not found".to_string()))?;
        let options = self.load_options(id).await?;
        Ok(ShopItem::from_parts(item, options))
    }

    pub async fn create(&self, request: CreateShopItemRequest) -> AppResult<ShopItem> {
        let mut errors = Vec::new();
        if !matches!(request.tab_id, Some(tab_id) if tab_id > 0) {
            errors.push(FieldError::new("tab_id", "Tab is required"));
        }
        if !matches!(request.temp_id, Some(temp_id) if temp_id > 0) {
            errors.push(FieldError::new("temp_id", "Item is required"));
        }
        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        let txn = self.pool.begin().await?;
        let inserted = item_shops::ActiveModel {
            tab_id: Set(request.tab_id.unwrap_or_default()),
            temp_id: Set(request.temp_id.unwrap_or_default()),
            gold: Set(request.gold),
            gem: Set(request.gem),
            is_new: Set(request.is_new.unwrap_or(true)),
            is_sell: Set(request.is_sell.unwrap_or(true)),
            item_exchange: Set(request.item_exchange.unwrap_or(-1)),
            quantity_exchange: Set(request.quantity_exchange.unwrap_or(0)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        Self::insert_options(&txn, inserted.id, &request.options).await?;
        txn.commit().await?;

        log::info!("Created shop item {} (template {})", inserted.id, inserted.temp_id);
        self.get(inserted.id).await
    }

    pub async fn update(&self, id: i32, request: UpdateShopItemRequest) -> AppResult<ShopItem> {
        let existing = item_shops::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Shop item not found".to_string()))?;

        let txn = self.pool.begin().await?;

        let mut model = existing.into_active_model();
        if let Some(tab_id) = request.tab_id {
            model.tab_id = Set(tab_id);
        }
        if let Some(temp_id) = request.temp_id {
            model.temp_id = Set(temp_id);
        }
        if let Some(gold) = request.gold {
            model.gold = Set(gold);
        }
        if let Some(gem) = request.gem {
            model.gem = Set(gem);
        }
        if let Some(is_new) = request.is_new {
            model.is_new = Set(is_new);
        }
        if let Some(is_sell) = request.is_sell {
            model.is_sell = Set(is_sell);
        }
        if let Some(item_exchange) = request.item_exchange {
            model.item_exchange = Set(item_exchange);
        }
        if let Some(quantity_exchange) = request.quantity_exchange {
            model.quantity_exchange = Set(quantity_exchange);
        }
        model.update(&txn).await?;

        // A supplied option list fully replaces the stored rows, no diffing:
        // delete everything, then insert what came in. An empty list leaves
        // the item with zero options.
        if let Some(options) = &request.options {
            shop_options::Entity::delete_many()
                .filter(shop_options::Column::ItemShopId.eq(id))
                .exec(&txn)
                .await?;
            Self::insert_options(&txn, id, options).await?;
        }

        txn.commit().await?;
        self.get(id).await
    }

    /// Option rows go first; one transaction covers the sequence.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let existing = item_shops::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Shop item not found".to_string()))?;

        let txn = self.pool.begin().await?;
        let removed = shop_options::Entity::delete_many()
            .filter(shop_options::Column::ItemShopId.eq(existing.id))
            .exec(&txn)
            .await?;
        item_shops::Entity::delete_by_id(existing.id).exec(&txn).await?;
        txn.commit().await?;

        log::info!(
            "Deleted shop item {} and {} option row(s)",
            existing.id,
            removed.rows_affected
        );
        Ok(())
    }

    async fn load_options(&self, item_shop_id: i32) -> AppResult<Vec<ShopOption>> {
        let rows = shop_options::Entity::find()
            .filter(shop_options::Column::ItemShopId.eq(item_shop_id))
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(ShopOption::from).collect())
    }

    async fn insert_options(
        txn: &DatabaseTransaction,
        item_shop_id: i32,
        options: &[ShopOptionInput],
    ) -> AppResult<()> {
        let rows: Vec<shop_options::ActiveModel> = options
            .iter()
            .filter(|o| o.option_id > 0)
            .map(|o| shop_options::ActiveModel {
                item_shop_id: Set(item_shop_id),
                option_id: Set(o.option_id),
                param: Set(o.param),
                ..Default::default()
            })
            .collect();
        if !rows.is_empty() {
            shop_options::Entity::insert_many(rows).exec(txn).await?;
        }
        Ok(())
    }
}
