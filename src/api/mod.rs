//! Typed user service endpoints.

pub mod auth;
pub mod users;
