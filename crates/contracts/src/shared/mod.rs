pub mod messages;
pub mod pagination;
pub mod serde_utils;
