//! Content for each route, drawn below the header.

pub mod about;
pub mod auth;
pub mod dashboard;
pub mod home;
