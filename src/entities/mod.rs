pub mod accounts;
pub mod gift_code_histories;
pub mod gift_codes;
pub mod item_option_templates;
pub mod item_shop_options;
pub mod item_shops;
pub mod item_templates;
pub mod milestone_claims;
pub mod milestones;
pub mod players;
pub mod tabs;

pub use accounts as account_entity;
pub use gift_code_histories as gift_code_history_entity;
pub use gift_codes as gift_code_entity;
pub use item_option_templates as item_option_template_entity;
pub use item_shop_options as item_shop_option_entity;
pub use item_shops as item_shop_entity;
pub use item_templates as item_template_entity;
pub use milestone_claims as milestone_claim_entity;
pub use milestones as milestone_entity;
pub use players as player_entity;
pub use tabs as tab_entity;
