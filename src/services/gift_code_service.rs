use crate::entities::{gift_code_entity as gift_codes, gift_code_history_entity as histories};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{reward_codec, validation};
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

const DUPLICATE_CODE_MESSAGE: &str = "A gift code with this code already exists";

#[derive(Clone)]
pub struct GiftCodeService {
    pool: DatabaseConnection,
}

impl GiftCodeService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: &GiftCodeListQuery) -> AppResult<PaginatedResponse<GiftCode>> {
        let params = PageRequest::new(query.page, query.page_size);

        let mut finder = gift_codes::Entity::find();
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            // Codes are stored upper-cased, so the search term is normalized
            // the same way before matching.
            finder = finder.filter(
                gift_codes::Column::Code.contains(&validation::normalize_code(search)),
            );
        }
        if let Some(status) = super::numeric_filter(query.status.as_deref()) {
            finder = finder.filter(gift_codes::Column::Status.eq(status));
        }

        let total = finder.clone().count(&self.pool).await?;
        let models = finder
            .order_by_desc(gift_codes::Column::CreatedAt)
            .limit(params.limit())
            .offset(params.offset())
            .all(&self.pool)
            .await?;

        let items = models.into_iter().map(GiftCode::from).collect();
        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get(&self, id: i64) -> AppResult<GiftCode> {
        let code = gift_codes::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Gift code not found".to_string()))?;
        Ok(GiftCode::from(code))
    }

    pub async fn create(&self, request: CreateGiftCodeRequest) -> AppResult<GiftCode> {
        let now = Utc::now();
        let errors = validation::validate_gift_code(&request, now);
        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        let code = validation::normalize_code(&request.code);
        if self.code_exists(&code, None).await? {
            return Err(AppError::DuplicateEntry(DUPLICATE_CODE_MESSAGE.to_string()));
        }

        let items = match &request.items {
            Some(lines) => reward_codec::encode(lines)?,
            None => None,
        };
        let expires_at = request.expires_at.as_deref().and_then(validation::parse_expiry);

        let inserted = gift_codes::ActiveModel {
            code: Set(code),
            code_type: Set(request.code_type),
            gold: Set(request.gold),
            gem: Set(request.gem),
            ruby: Set(request.ruby),
            items: Set(items),
            status: Set(request.status),
            active: Set(0),
            expires_at: Set(expires_at),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created gift code {} ({})", inserted.id, inserted.code);
        Ok(GiftCode::from(inserted))
    }

    pub async fn update(&self, id: i64, request: UpdateGiftCodeRequest) -> AppResult<GiftCode> {
        let existing = gift_codes::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Gift code not found".to_string()))?;

        let now = Utc::now();
        let mut errors = validation::validate_gift_code_update(&request, now);

        // Reward presence runs against the merged view: stored values stand
        // in for anything the patch leaves out, so a partial update cannot
        // zero out the last reward unnoticed.
        let gold = request.gold.unwrap_or(existing.gold);
        let gem = request.gem.unwrap_or(existing.gem);
        let ruby = request.ruby.unwrap_or(existing.ruby);
        let has_items = match &request.items {
            Some(Some(lines)) => lines.iter().any(|l| l.item_id() > 0),
            Some(None) => false,
            None => !reward_codec::decode::<GiftItem>(existing.items.as_deref()).is_empty(),
        };
        errors.extend(validation::validate_merged_rewards(gold, gem, ruby, has_items));

        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        // Duplicate check only when the normalized code actually changes.
        let new_code = match &request.code {
            Some(code) => {
                let normalized = validation::normalize_code(code);
                if normalized != validation::normalize_code(&existing.code)
                    && self.code_exists(&normalized, Some(id)).await?
                {
                    return Err(AppError::DuplicateEntry(DUPLICATE_CODE_MESSAGE.to_string()));
                }
                Some(normalized)
            }
            None => None,
        };

        let mut model = existing.into_active_model();
        if let Some(code) = new_code {
            model.code = Set(code);
        }
        if let Some(code_type) = request.code_type {
            model.code_type = Set(code_type);
        }
        if let Some(gold) = request.gold {
            model.gold = Set(gold);
        }
        if let Some(gem) = request.gem {
            model.gem = Set(gem);
        }
        if let Some(ruby) = request.ruby {
            model.ruby = Set(ruby);
        }
        if let Some(status) = request.status {
            model.status = Set(status);
        }
        match &request.items {
            Some(Some(lines)) => model.items = Set(reward_codec::encode(lines)?),
            Some(None) => model.items = Set(None),
            None => {}
        }
        match &request.expires_at {
            Some(Some(raw)) => model.expires_at = Set(validation::parse_expiry(raw)),
            Some(None) => model.expires_at = Set(None),
            None => {}
        }
        model.updated_at = Set(now);

        let updated = model.update(&self.pool).await?;
        Ok(GiftCode::from(updated))
    }

    /// Redemption history rows go first; one transaction covers the sequence.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let existing = gift_codes::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Gift code not found".to_string()))?;

        let txn = self.pool.begin().await?;
        let removed = histories::Entity::delete_many()
            .filter(histories::Column::GiftCodeId.eq(existing.id))
            .exec(&txn)
            .await?;
        gift_codes::Entity::delete_by_id(existing.id).exec(&txn).await?;
        txn.commit().await?;

        log::info!(
            "Deleted gift code {} ({}) and {} history row(s)",
            existing.id,
            existing.code,
            removed.rows_affected
        );
        Ok(())
    }

    /// Case-insensitive existence check; `exclude_id` skips the row being
    /// updated.
    async fn code_exists(&self, normalized: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let mut finder = gift_codes::Entity::find()
            .filter(Expr::expr(Func::upper(Expr::col(gift_codes::Column::Code))).eq(normalized));
        if let Some(id) = exclude_id {
            finder = finder.filter(gift_codes::Column::Id.ne(id));
        }
        Ok(finder.count(&self.pool).await? > 0)
    }
}
