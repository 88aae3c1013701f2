use sqlx::PgPool;

use crate::infrastructure::locks::LeagueLocks;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub draft_locks: LeagueLocks,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            draft_locks: LeagueLocks::new(),
        }
    }
}
