use crate::entities::{milestone_claim_entity as claims, milestone_entity as milestones};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{reward_codec, validation};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

const DUPLICATE_THRESHOLD_MESSAGE: &str = "A milestone with this threshold already exists";

#[derive(Clone)]
pub struct MilestoneService {
    pool: DatabaseConnection,
}

impl MilestoneService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Milestones form a short ladder; the list is returned whole, ordered by
    /// threshold.
    pub async fn list(&self) -> AppResult<Vec<Milestone>> {
        let models = milestones::Entity::find()
            .order_by_asc(milestones::Column::Required)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Milestone::from).collect())
    }

    pub async fn get(&self, id: i32) -> AppResult<Milestone> {
        let milestone = milestones::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Milestone not found".to_string()))?;
        Ok(Milestone::from(milestone))
    }

    pub async fn create(&self, request: CreateMilestoneRequest) -> AppResult<Milestone> {
        let errors = validation::validate_milestone(&request);
        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }
        let required = request.required.ok_or_else(|| {
            AppError::validation("required", "Required amount must be greater than 0")
        })?;

        if self.threshold_exists(required, None).await? {
            return Err(AppError::DuplicateEntry(DUPLICATE_THRESHOLD_MESSAGE.to_string()));
        }

        let rewards = match &request.rewards {
            Some(lines) => reward_codec::encode(lines)?,
            None => None,
        };

        let inserted = milestones::ActiveModel {
            required: Set(required),
            descriptor: Set(request.descriptor),
            rewards: Set(rewards),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created milestone {} (required {})", inserted.id, inserted.required);
        Ok(Milestone::from(inserted))
    }

    pub async fn update(&self, id: i32, request: UpdateMilestoneRequest) -> AppResult<Milestone> {
        let existing = milestones::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Milestone not found".to_string()))?;

        let errors = validation::validate_milestone_update(&request);
        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        // Uniqueness is re-checked only when the threshold actually moves.
        if let Some(required) = request.required
            && required != existing.required
            && self.threshold_exists(required, Some(id)).await?
        {
            return Err(AppError::DuplicateEntry(DUPLICATE_THRESHOLD_MESSAGE.to_string()));
        }

        let mut model = existing.into_active_model();
        if let Some(required) = request.required {
            model.required = Set(required);
        }
        match &request.descriptor {
            Some(Some(descriptor)) => model.descriptor = Set(Some(descriptor.clone())),
            Some(None) => model.descriptor = Set(None),
            None => {}
        }
        match &request.rewards {
            Some(Some(lines)) => model.rewards = Set(reward_codec::encode(lines)?),
            Some(None) => model.rewards = Set(None),
            None => {}
        }

        let updated = model.update(&self.pool).await?;
        Ok(Milestone::from(updated))
    }

    /// Claim-history rows go first; one transaction covers the sequence.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let existing = milestones::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Milestone not found".to_string()))?;

        let txn = self.pool.begin().await?;
        let removed = claims::Entity::delete_many()
            .filter(claims::Column::MocnapId.eq(existing.id))
            .exec(&txn)
            .await?;
        milestones::Entity::delete_by_id(existing.id).exec(&txn).await?;
        txn.commit().await?;

        log::info!(
            "Deleted milestone {} and {} claim row(s)",
            existing.id,
            removed.rows_affected
        );
        Ok(())
    }

    async fn threshold_exists(&self, required: i64, exclude_id: Option<i32>) -> AppResult<bool> {
        let mut finder =
            milestones::Entity::find().filter(milestones::Column::Required.eq(required));
        if let Some(id) = exclude_id {
            finder = finder.filter(milestones::Column::Id.ne(id));
        }
        Ok(finder.count(&self.pool).await? > 0)
    }
}
