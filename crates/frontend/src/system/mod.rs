pub mod pages;
pub mod teams;
pub mod users;
