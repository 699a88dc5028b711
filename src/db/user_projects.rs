use sqlx::PgPool;

use crate::models::{ProjectMember, UserProject};

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    link: UserProject,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO user_to_project (project_id, user_id) VALUES ($1, $2)")
        .bind(link.project_id)
        .bind(link.user_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Members of the given projects, each user at most once per project.
pub async fn members_of(
    pool: &PgPool,
    project_ids: &[i32],
) -> Result<Vec<ProjectMember>, sqlx::Error> {
    if project_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, ProjectMember>(
        "SELECT DISTINCT up.project_id, u.id, u.username, u.email, u.password, u.active
         FROM user_to_project up
         JOIN users u ON u.id = up.user_id
         WHERE up.project_id = ANY($1)
         ORDER BY up.project_id, u.id",
    )
    .bind(project_ids)
    .fetch_all(pool)
    .await
}
