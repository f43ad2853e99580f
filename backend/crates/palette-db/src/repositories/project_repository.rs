//! Project repository: list and insert.

use crate::Result as DbErrorResult;

use palette_core::{NewProject, Project};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct ProjectRow {
    id: i64,
    project_name: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            project_name: row.project_name,
        }
    }
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a project and return the id the store generated for it
    pub async fn create(&self, project: &NewProject) -> DbErrorResult<i64> {
        let result = sqlx::query("INSERT INTO projects (project_name) VALUES (?)")
            .bind(&project.project_name)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, project_name
                FROM projects
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }
}
