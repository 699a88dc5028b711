pub mod projects;
pub mod schema;
pub mod user_projects;
pub mod users;
