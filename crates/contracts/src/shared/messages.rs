//! Bodies the backend attaches to mutating responses.

use serde::{Deserialize, Serialize};

/// Optional confirmation text sent with create/update responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody {
    #[serde(default)]
    pub success_message: Option<String>,
}

/// Human readable reason sent with every non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub error_message: Option<String>,
}
