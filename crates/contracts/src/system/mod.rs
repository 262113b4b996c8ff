pub mod api_key;
pub mod teams;
pub mod users;
