//! Console configuration.
//!
//! The server renders a `window._globals` object into every admin page with
//! endpoint URLs and localized messages. It is read once at start-up and
//! handed to each view-model, which picks the keys it needs.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::shared::url_template::{TemplateError, UrlTemplate};

const GLOBALS_KEY: &str = "_globals";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("window object is not available")]
    NoWindow,
    #[error("failed to decode `_globals`: {0}")]
    Decode(String),
    #[error("endpoint `{0}` is not configured")]
    MissingEndpoint(&'static str),
    #[error("endpoint `{key}` is invalid: {source}")]
    Template {
        key: &'static str,
        #[source]
        source: TemplateError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConsoleConfig {
    #[serde(flatten)]
    pub endpoints: Endpoints,
    #[serde(flatten)]
    pub messages: Messages,
}

impl ConsoleConfig {
    /// Decode `window._globals`. A page without the object gets the defaults.
    pub fn from_window() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
        let globals = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(GLOBALS_KEY))
            .map_err(|e| ConfigError::Decode(format!("{:?}", e)))?;
        if globals.is_undefined() || globals.is_null() {
            log::warn!("`{}` is not defined, using default configuration", GLOBALS_KEY);
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(globals).map_err(|e| ConfigError::Decode(e.to_string()))
    }
}

/// Endpoint URLs. Each view requires only its own keys; templates use `{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub install_endpoint: Option<String>,
    pub login_endpoint: Option<String>,
    pub settings_endpoint: Option<String>,
    pub profile_endpoint: Option<String>,
    pub fetch_api_key_endpoint: Option<String>,
    pub rotate_api_key_endpoint: Option<String>,
    pub users_endpoint: Option<String>,
    pub create_user_endpoint: Option<String>,
    pub user_endpoint: Option<String>,
    pub delete_user_endpoint: Option<String>,
    pub teams_endpoint: Option<String>,
    pub create_team_endpoint: Option<String>,
    pub team_endpoint: Option<String>,
    pub delete_team_endpoint: Option<String>,
}

/// A configured endpoint URL, or [`ConfigError::MissingEndpoint`].
pub fn required(value: &Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingEndpoint(key))
}

/// A configured endpoint parsed as a [`UrlTemplate`].
pub fn template(value: &Option<String>, key: &'static str) -> Result<UrlTemplate, ConfigError> {
    let raw = required(value, key)?;
    UrlTemplate::parse(&raw).map_err(|source| ConfigError::Template { key, source })
}

/// User-facing strings. Keys absent from the page keep their English default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub new_user: String,
    pub update_user_message: String,
    pub delete_user_alert: String,
    pub delete_user_message: String,
    pub new_team: String,
    pub update_team_message: String,
    pub delete_team_alert: String,
    pub delete_team_message: String,
    pub operation_succeeded_message: String,
    pub network_error_message: String,
    pub unexpected_error_message: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            new_user: "User created successfully!".to_string(),
            update_user_message: "User updated successfully!".to_string(),
            delete_user_alert: "Are you sure you want to delete this user?".to_string(),
            delete_user_message: "User deleted successfully!".to_string(),
            new_team: "Team created successfully!".to_string(),
            update_team_message: "Team updated successfully!".to_string(),
            delete_team_alert: "Are you sure you want to delete this team?".to_string(),
            delete_team_message: "Team deleted successfully!".to_string(),
            operation_succeeded_message: "Saved.".to_string(),
            network_error_message: "Unable to reach the server, please try again.".to_string(),
            unexpected_error_message: "Something went wrong, please try again.".to_string(),
        }
    }
}
