//! Shared application state

use std::sync::Arc;

use clubhouse_auth::AuthService;
use clubhouse_db::repos::{PlayerStore, UserStore};

/// Shared state handed to every handler.
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub players: Arc<dyn PlayerStore>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        players: Arc<dyn PlayerStore>,
        auth: AuthService,
    ) -> Self {
        Self {
            users,
            players,
            auth,
        }
    }
}
