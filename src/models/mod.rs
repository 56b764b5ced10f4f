pub mod account;
pub mod catalog;
pub mod gift_code;
pub mod milestone;
pub mod pagination;
pub mod reward;
pub mod shop;

pub use account::*;
pub use catalog::*;
pub use gift_code::*;
pub use milestone::*;
pub use pagination::*;
pub use reward::*;
pub use shop::*;
