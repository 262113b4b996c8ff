use serde::{Deserialize, Serialize};

use crate::shared::pagination::Listed;
use crate::shared::serde_utils::null_as_default;

/// Team with its member user ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Listed for Team {
    const COLLECTION_KEY: &'static str = "teams";

    fn key(&self) -> &str {
        &self.uuid
    }
}
