use super::User;

/// One row of `user_to_project`.
#[derive(Debug, Clone, Copy, PartialEq, sqlx::FromRow)]
pub struct UserProject {
    pub project_id: i32,
    pub user_id: i32,
}

/// A member row joined with the project it belongs to.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectMember {
    pub project_id: i32,
    #[sqlx(flatten)]
    pub user: User,
}
