use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::db;
use crate::error::AppError;
use crate::models::TopUser;
use crate::state::SharedState;

const TOP_LIMIT: i64 = 10;

#[derive(Serialize)]
pub struct TopUsers {
    pub top10: Vec<TopUser>,
}

pub async fn top(State(state): State<SharedState>) -> Result<Json<TopUsers>, AppError> {
    let top10 = db::users::top_by_project_count(&state.pool, TOP_LIMIT).await?;
    Ok(Json(TopUsers { top10 }))
}
