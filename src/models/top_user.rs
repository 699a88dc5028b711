use serde::Serialize;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct TopUser {
    pub id: i32,
    pub total: i64,
}
