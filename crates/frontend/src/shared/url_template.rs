use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const ID_PLACEHOLDER: &str = "{id}";
/// Placeholder used by server-rendered pages that predate `{id}`.
pub const UUID_PLACEHOLDER: &str = "UUID";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("`{0}` has no {{id}} placeholder")]
    MissingPlaceholder(String),
    #[error("`{0}` has more than one {{id}} placeholder")]
    RepeatedPlaceholder(String),
}

/// Endpoint URL with exactly one `{id}` slot, e.g. `/api/v1/user/{id}`.
/// Templates without `{id}` may use `UUID` instead.
///
/// The template is split once when parsed, so building a URL never searches
/// the previous result for an old id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    prefix: String,
    suffix: String,
}

impl UrlTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let placeholder = [ID_PLACEHOLDER, UUID_PLACEHOLDER]
            .into_iter()
            .find(|p| template.contains(p))
            .ok_or_else(|| TemplateError::MissingPlaceholder(template.to_string()))?;
        let (prefix, suffix) = template
            .split_once(placeholder)
            .ok_or_else(|| TemplateError::MissingPlaceholder(template.to_string()))?;
        if suffix.contains(placeholder) {
            return Err(TemplateError::RepeatedPlaceholder(template.to_string()));
        }
        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// URL for `id`, percent-encoded as a single path segment.
    pub fn build(&self, id: &str) -> String {
        format!("{}{}{}", self.prefix, urlencoding::encode(id), self.suffix)
    }
}

impl FromStr for UrlTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, ID_PLACEHOLDER, self.suffix)
    }
}
