mod project;
mod top_user;
mod user;
mod user_project;

pub use project::{NewProject, Project, ProjectDetail};
pub use top_user::TopUser;
pub use user::{NewUser, User};
pub use user_project::{ProjectMember, UserProject};
