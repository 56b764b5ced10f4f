use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Common view over the two reward wire shapes.
///
/// Gift codes and milestones store structurally identical reward lists but
/// with different field names (`GiftItem` vs `RewardItem`) — an irregularity
/// inherited from the game database that the codec and the validators paper
/// over through this trait. The JSON names must stay as-is: the game server
/// reads both columns.
pub trait RewardLine {
    fn item_id(&self) -> i32;
    fn quantity(&self) -> i32;
    /// (option id, param) pairs.
    fn options(&self) -> Vec<(i32, i32)>;
}

/// One item granted by a gift code, stored in `gift_codes.items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GiftItem {
    pub id: i32,
    pub quantity: i32,
    #[serde(default)]
    pub options: Vec<GiftItemOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GiftItemOption {
    pub id: i32,
    pub param: i32,
}

impl RewardLine for GiftItem {
    fn item_id(&self) -> i32 {
        self.id
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn options(&self) -> Vec<(i32, i32)> {
        self.options.iter().map(|o| (o.id, o.param)).collect()
    }
}

/// One item granted by a top-up milestone, stored in `moc_nap.rewards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RewardItem {
    pub item_id: i32,
    pub item_quantity: i32,
    #[serde(default)]
    pub item_options: Vec<RewardItemOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RewardItemOption {
    pub item_option_id: i32,
    pub item_option_param: i32,
}

impl RewardLine for RewardItem {
    fn item_id(&self) -> i32 {
        self.item_id
    }

    fn quantity(&self) -> i32 {
        self.item_quantity
    }

    fn options(&self) -> Vec<(i32, i32)> {
        self.item_options
            .iter()
            .map(|o| (o.item_option_id, o.item_option_param))
            .collect()
    }
}
