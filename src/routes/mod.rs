pub mod projects;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        // Users
        .route("/api/v1.0/top/users", get(users::top))
        // Projects
        .route("/api/v1.0/projects", get(projects::list))
        .route("/api/v1.0/projects/{page}", get(projects::list_page))
}

async fn index() -> &'static str {
    "Hello World!"
}
