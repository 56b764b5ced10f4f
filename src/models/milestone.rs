use crate::entities::milestones;
use crate::models::RewardItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored row; `rewards` is the raw JSON text (`RewardItem` list) or null.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Milestone {
    pub id: i32,
    pub required: i64,
    pub descriptor: Option<String>,
    pub rewards: Option<String>,
}

impl From<milestones::Model> for Milestone {
    fn from(m: milestones::Model) -> Self {
        Self {
            id: m.id,
            required: m.required,
            descriptor: m.descriptor,
            rewards: m.rewards,
        }
    }
}

/// `required` is optional here so a missing value surfaces as a field error
/// rather than a deserialize failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMilestoneRequest {
    pub required: Option<i64>,
    #[serde(default)]
    pub descriptor: Option<String>,
    #[serde(default)]
    pub rewards: Option<Vec<RewardItem>>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMilestoneRequest {
    pub required: Option<i64>,
    #[serde(default, deserialize_with = "crate::utils::double_option")]
    pub descriptor: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::utils::double_option")]
    pub rewards: Option<Option<Vec<RewardItem>>>,
}
