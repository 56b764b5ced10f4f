pub mod accounts;
pub mod catalog;
pub mod gift_codes;
pub mod milestones;
pub mod shop;

pub use accounts::accounts_config;
pub use catalog::catalog_config;
pub use gift_codes::gift_codes_config;
pub use milestones::milestones_config;
pub use shop::shop_config;
