use sqlx::PgPool;

use crate::models::{NewUser, TopUser, User};

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    user: &NewUser,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, username, email, password, active)
         VALUES (COALESCE($1, nextval(pg_get_serial_sequence('users', 'id'))::int),
                 $2, $3, $4, COALESCE($5, TRUE))
         RETURNING *",
    )
    .bind(user.id)
    .bind(user.username.as_deref())
    .bind(user.email.as_deref())
    .bind(user.password.as_deref())
    .bind(user.active)
    .fetch_one(executor)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Users ranked by how many projects they belong to. Users without any
/// project are not listed; ties come back in whatever order the
/// aggregate produces.
pub async fn top_by_project_count(pool: &PgPool, limit: i64) -> Result<Vec<TopUser>, sqlx::Error> {
    sqlx::query_as::<_, TopUser>(
        "SELECT u.id, COUNT(DISTINCT up.project_id) AS total
         FROM users u
         JOIN user_to_project up ON up.user_id = u.id
         GROUP BY u.id
         ORDER BY total DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
