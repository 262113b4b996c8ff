use serde::{Deserialize, Serialize};

/// Body returned by both the fetch and the rotate API key endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub api_key: String,
}
