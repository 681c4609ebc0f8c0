//! Data Transfer Objects
//!
//! Request and response types for the HTTP API.

pub mod auth;
pub mod player;
pub mod user;

pub use auth::*;
pub use player::*;
pub use user::*;
