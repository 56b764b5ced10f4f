pub mod reward_codec;
pub mod serde_ext;
pub mod validation;

pub use serde_ext::double_option;
