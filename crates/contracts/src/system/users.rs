use serde::{Deserialize, Serialize};

use crate::shared::pagination::Listed;
use crate::shared::serde_utils::null_as_default;

/// Console account as returned by the users collection and detail endpoints.
///
/// Every field defaults, and `null` reads as empty, so partial records
/// still decode. Fields other than these are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Listed for User {
    const COLLECTION_KEY: &'static str = "users";

    fn key(&self) -> &str {
        &self.uuid
    }
}
