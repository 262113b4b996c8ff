//! Wire types shared between the admin console front end and its backend API.

pub mod shared;
pub mod system;
