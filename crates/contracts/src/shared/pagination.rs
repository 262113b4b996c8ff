//! Paginated collection envelope.
//!
//! Collection endpoints answer with
//! `{ "<plural>": [...], "_metadata": { "limit", "offset", "totalCount" } }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters accepted by every collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub offset: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMetadata {
    pub limit: u64,
    pub offset: u64,
    pub total_count: u64,
}

/// Entity served by a collection endpoint under a fixed plural key.
pub trait Listed: DeserializeOwned {
    const COLLECTION_KEY: &'static str;

    /// Identifier used in detail, update and delete URLs.
    fn key(&self) -> &str;
}

/// One page of entities together with the server's pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

impl<T: Listed> Collection<T> {
    /// Decode an envelope. A `null` or missing item array is an empty page;
    /// a missing `_metadata` block is an error.
    pub fn from_envelope(mut body: Value) -> Result<Self, serde_json::Error> {
        let items = match body.get_mut(T::COLLECTION_KEY).map(Value::take) {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => serde_json::from_value(raw)?,
        };
        let metadata = match body.get_mut("_metadata").map(Value::take) {
            Some(raw) => serde_json::from_value(raw)?,
            None => return Err(serde::de::Error::missing_field("_metadata")),
        };
        Ok(Self { items, metadata })
    }
}
