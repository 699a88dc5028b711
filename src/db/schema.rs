use sqlx::{PgConnection, PgPool};

/// Creates any missing tables. Safe to call on a populated store.
pub async fn create_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Drops every table, data included, along with the migration ledger so
/// that [`create_all`] rebuilds from scratch.
pub async fn drop_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS user_to_project, projects, users, _sqlx_migrations CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

/// Moves the id sequences past rows inserted with explicit ids.
pub async fn sync_sequences(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    for table in ["users", "projects"] {
        sqlx::query(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'),
                           COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
        ))
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
