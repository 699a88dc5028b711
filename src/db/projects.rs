use sqlx::PgPool;

use crate::models::{NewProject, Project};

/// Ordering applied to the project listing, driven by `?sorted_date=`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDate {
    Ascending,
    Descending,
    Natural,
}

impl SortDate {
    /// `"ask"` is the accepted spelling for ascending. Anything unrecognised
    /// leaves the natural order.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("ask") => SortDate::Ascending,
            Some("desc") => SortDate::Descending,
            _ => SortDate::Natural,
        }
    }

    fn order_clause(self) -> &'static str {
        match self {
            SortDate::Ascending => "created_at ASC NULLS FIRST, id",
            SortDate::Descending => "created_at DESC NULLS LAST, id",
            SortDate::Natural => "id",
        }
    }
}

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project: &NewProject,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (id, name, created_at)
         VALUES (COALESCE($1, nextval(pg_get_serial_sequence('projects', 'id'))::int),
                 $2, COALESCE($3, CURRENT_TIMESTAMP::timestamp))
         RETURNING *",
    )
    .bind(project.id)
    .bind(project.name.as_deref())
    .bind(project.created_at)
    .fetch_one(executor)
    .await
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn list_page(
    pool: &PgPool,
    sort: SortDate,
    limit: i64,
    offset: i64,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(&format!(
        "SELECT * FROM projects ORDER BY {} LIMIT $1 OFFSET $2",
        sort.order_clause()
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}
