//! Palette repository.
//!
//! Lookups return every matching row rather than an `Option`, so callers
//! decide what an empty result means for them.

use crate::Result as DbErrorResult;

use palette_core::{NewPalette, Palette};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct PaletteRow {
    id: i64,
    palette_title: String,
    color_1: String,
    color_2: String,
    color_3: String,
    color_4: String,
    color_5: String,
    project_id: i64,
}

impl From<PaletteRow> for Palette {
    fn from(row: PaletteRow) -> Self {
        Self {
            id: row.id,
            palette_title: row.palette_title,
            color_1: row.color_1,
            color_2: row.color_2,
            color_3: row.color_3,
            color_4: row.color_4,
            color_5: row.color_5,
            project_id: row.project_id,
        }
    }
}

pub struct PaletteRepository {
    pool: SqlitePool,
}

impl PaletteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a palette and return its generated id.
    ///
    /// Fails with a foreign key violation when `project_id` names no project.
    pub async fn create(&self, palette: &NewPalette) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
                INSERT INTO palettes (
                    palette_title, color_1, color_2, color_3, color_4, color_5,
                    project_id
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&palette.palette_title)
        .bind(&palette.color_1)
        .bind(&palette.color_2)
        .bind(&palette.color_3)
        .bind(&palette.color_4)
        .bind(&palette.color_5)
        .bind(palette.project_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Vec<Palette>> {
        let rows = sqlx::query_as::<_, PaletteRow>(
            r#"
                SELECT id, palette_title, color_1, color_2, color_3, color_4, color_5,
                    project_id
                FROM palettes
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Palette::from).collect())
    }

    pub async fn find_by_project(&self, project_id: i64) -> DbErrorResult<Vec<Palette>> {
        let rows = sqlx::query_as::<_, PaletteRow>(
            r#"
                SELECT id, palette_title, color_1, color_2, color_3, color_4, color_5,
                    project_id
                FROM palettes
                WHERE project_id = ?
                ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Palette::from).collect())
    }

    /// Hard delete. Returns the number of rows removed (0 or 1).
    pub async fn delete(&self, id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM palettes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
