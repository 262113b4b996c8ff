//! URL helpers for collection requests.

use contracts::shared::pagination::ListQuery;

use crate::shared::http::ApiError;

/// Append pagination parameters to a collection URL
///
/// # Arguments
/// * `url` - Collection endpoint, with or without an existing query string
/// * `query` - Page window to request
///
/// # Example
/// ```rust,ignore
/// let url = with_query("/api/v1/user", &ListQuery { offset: 20, limit: 10 })?;
/// assert_eq!(url, "/api/v1/user?offset=20&limit=10");
/// ```
pub fn with_query(url: &str, query: &ListQuery) -> Result<String, ApiError> {
    let encoded = serde_qs::to_string(query)?;
    let separator = if url.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", url, separator, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        let query = ListQuery { offset: 20, limit: 10 };
        assert_eq!(
            with_query("/api/v1/user", &query).unwrap(),
            "/api/v1/user?offset=20&limit=10"
        );
        assert_eq!(
            with_query("/api/v1/user?role=admin", &query).unwrap(),
            "/api/v1/user?role=admin&offset=20&limit=10"
        );
    }
}
