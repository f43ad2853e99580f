//! Development seed data.

use crate::Result as DbErrorResult;

use palette_core::NewPalette;

use log::info;
use sqlx::SqlitePool;

const EXAMPLE_PROJECT_NAME: &str = "Example Project";

/// (title, colors) for the palettes attached to the example project
const EXAMPLE_PALETTES: [(&str, [&str; 5]); 2] = [
    (
        "Cool Sunset",
        ["#01084f", "#391954", "#631e50", "#a73c5a", "#ff7954"],
    ),
    (
        "Summer Ice",
        ["#f4a644", "#f9914b", "#f47b52", "#f25e5e", "#f64863"],
    ),
];

/// Replace all data with one example project and its palettes.
///
/// Runs in a single transaction: either every row lands or none do.
/// Returns the id of the example project.
pub async fn seed_example(pool: &SqlitePool) -> DbErrorResult<i64> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM palettes").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM projects").execute(&mut *tx).await?;

    let project_id = sqlx::query("INSERT INTO projects (project_name) VALUES (?)")
        .bind(EXAMPLE_PROJECT_NAME)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    for (title, [c1, c2, c3, c4, c5]) in EXAMPLE_PALETTES {
        let palette = NewPalette {
            palette_title: title.to_string(),
            color_1: c1.to_string(),
            color_2: c2.to_string(),
            color_3: c3.to_string(),
            color_4: c4.to_string(),
            color_5: c5.to_string(),
            project_id,
        };

        sqlx::query(
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
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(
        "Seeded project {} with {} palettes",
        project_id,
        EXAMPLE_PALETTES.len()
    );

    Ok(project_id)
}
