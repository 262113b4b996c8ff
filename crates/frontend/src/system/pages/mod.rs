pub mod api_key;
pub mod install;
pub mod login;
pub mod profile;
pub mod settings;
