pub mod error;
pub mod repositories;
pub mod seed;

pub use error::{DbError, Result};
pub use repositories::palette_repository::PaletteRepository;
pub use repositories::project_repository::ProjectRepository;

use log::info;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

/// Schema migrations for the `projects` and `palettes` tables
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply every pending migration to `pool`
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    info!("Migrations complete");

    Ok(())
}
