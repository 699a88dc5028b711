use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub active: bool,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User {}>", self.username)
    }
}

/// Insertable user. Unset fields fall back to the column defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub active: Option<bool>,
}

impl NewUser {
    /// Builds a user from loose key/value input. Only `id`, `username`, `email`,
    /// `password` and `active` are taken; anything else, or a value of the wrong
    /// type, is dropped.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let mut user = NewUser::default();
        for (key, value) in fields {
            match key.as_str() {
                "id" => user.id = value.as_i64().and_then(|v| i32::try_from(v).ok()),
                "username" => user.username = value.as_str().map(str::to_owned),
                "email" => user.email = value.as_str().map(str::to_owned),
                "password" => user.password = value.as_str().map(str::to_owned),
                "active" => user.active = value.as_bool(),
                _ => {}
            }
        }
        user
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_fields_ignores_unknown_keys() {
        let fields = json!({
            "id": 3,
            "username": "user_3",
            "email": "user_3@example.com",
            "password": "password",
            "active": false,
            "is_admin": true,
            "role": "owner",
        });
        let user = NewUser::from_fields(fields.as_object().unwrap());
        assert_eq!(
            user,
            NewUser {
                id: Some(3),
                username: Some("user_3".to_string()),
                email: Some("user_3@example.com".to_string()),
                password: Some("password".to_string()),
                active: Some(false),
            }
        );
    }

    #[test]
    fn from_fields_drops_mistyped_values() {
        let fields = json!({ "id": "seven", "username": 42, "active": "yes" });
        let user = NewUser::from_fields(fields.as_object().unwrap());
        assert_eq!(user, NewUser::default());
    }

    #[test]
    fn serialized_user_has_no_password() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "password".to_string(),
            active: true,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "username": "admin", "email": "admin@example.com", "active": true })
        );
        assert_eq!(user.to_string(), "<User admin>");
    }
}
