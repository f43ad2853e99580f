use sqlx::SqlitePool;

/// Shared application state for REST handlers.
///
/// Handlers build their repositories from `pool` per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
