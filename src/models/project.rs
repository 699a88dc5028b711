use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::User;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Project id {}, name {}>", self.id, self.name)
    }
}

/// A project together with its members, in response shape.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub id: i32,
    pub name: String,
    pub users: Vec<User>,
    #[serde(serialize_with = "dump_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl ProjectDetail {
    pub fn new(project: Project, users: Vec<User>) -> Self {
        Self {
            id: project.id,
            name: project.name,
            users,
            created_at: project.created_at,
        }
    }
}

/// Timestamps go out as `["YYYY-MM-DD", "HH:MM:SS"]`, or null.
fn dump_datetime<S: Serializer>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(dt) => [
            dt.format("%Y-%m-%d").to_string(),
            dt.format("%H:%M:%S").to_string(),
        ]
        .serialize(serializer),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProject {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl NewProject {
    /// Same contract as [`super::NewUser::from_fields`]: `id`, `name` and
    /// `created_at` are taken, everything else is dropped.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let mut project = NewProject::default();
        for (key, value) in fields {
            match key.as_str() {
                "id" => project.id = value.as_i64().and_then(|v| i32::try_from(v).ok()),
                "name" => project.name = value.as_str().map(str::to_owned),
                "created_at" => project.created_at = value.as_str().and_then(parse_timestamp),
                _ => {}
            }
        }
        project
    }
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
