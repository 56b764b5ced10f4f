use crate::entities::{account_entity as accounts, player_entity as players};
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct AccountService {
    pool: DatabaseConnection,
}

impl AccountService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        query: &AccountListQuery,
    ) -> AppResult<PaginatedResponse<AccountSummary>> {
        let params = PageRequest::new(query.page, query.page_size);

        let mut finder = accounts::Entity::find();
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            finder = finder.filter(accounts::Column::Username.contains(search));
        }
        if let Some(ban) = super::numeric_filter(query.ban.as_deref()) {
            finder = finder.filter(accounts::Column::Ban.eq(ban));
        }

        let total = finder.clone().count(&self.pool).await?;
        let models = finder
            .order_by_desc(accounts::Column::Id)
            .limit(params.limit())
            .offset(params.offset())
            .all(&self.pool)
            .await?;

        let items = models.into_iter().map(AccountSummary::from).collect();
        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get(&self, id: i32) -> AppResult<AccountDetail> {
        let account = accounts::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;
        Ok(AccountDetail::from(account))
    }

    /// Partial update: only supplied fields change.
    pub async fn update(&self, id: i32, request: UpdateAccountRequest) -> AppResult<AccountDetail> {
        let mut model = accounts::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?
            .into_active_model();

        if let Some(ban) = request.ban {
            model.ban = Set(ban);
        }
        if let Some(is_admin) = request.is_admin {
            model.is_admin = Set(is_admin);
        }
        if let Some(vnd) = request.vnd {
            model.vnd = Set(vnd);
        }
        if let Some(coin) = request.coin {
            model.coin = Set(coin);
        }
        if let Some(tongnap) = request.tongnap {
            model.tongnap = Set(tongnap);
        }
        if let Some(tichdiem) = request.tichdiem {
            model.tichdiem = Set(tichdiem);
        }

        let updated = model.update(&self.pool).await?;
        Ok(AccountDetail::from(updated))
    }

    /// The store has no cascade-on-delete; player rows go first, inside one
    /// transaction with the parent.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let existing = accounts::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

        let txn = self.pool.begin().await?;
        let players_removed = players::Entity::delete_many()
            .filter(players::Column::AccountId.eq(existing.id))
            .exec(&txn)
            .await?;
        accounts::Entity::delete_by_id(existing.id).exec(&txn).await?;
        txn.commit().await?;

        log::info!(
            "Deleted account {} and {} player row(s)",
            existing.id,
            players_removed.rows_affected
        );
        Ok(())
    }

    /// Returns the number of accounts actually removed; ids with no matching
    /// row are skipped silently.
    pub async fn bulk_delete(&self, ids: &[i32]) -> AppResult<u64> {
        if ids.is_empty() {
            return Err(AppError::validation("ids", "No account IDs provided"));
        }

        let txn = self.pool.begin().await?;
        players::Entity::delete_many()
            .filter(players::Column::AccountId.is_in(ids.to_vec()))
            .exec(&txn)
            .await?;
        let result = accounts::Entity::delete_many()
            .filter(accounts::Column::Id.is_in(ids.to_vec()))
            .exec(&txn)
            .await?;
        txn.commit().await?;

        Ok(result.rows_affected)
    }
}
