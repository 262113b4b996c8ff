pub mod api_utils;
pub mod browser;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod form;
pub mod form_submit;
pub mod http;
pub mod icons;
pub mod list_vm;
pub mod notification;
pub mod pagination;
pub mod scheduler;
pub mod services;
pub mod url_template;

#[cfg(test)]
pub mod testing;
