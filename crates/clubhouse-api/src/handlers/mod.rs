//! HTTP Request Handlers

pub mod auth;
pub mod health;
pub mod players;
pub mod users;
