//! User types

use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub email: Option<String>,
    pub is_verified: bool,
    pub date_of_birth: Option<String>,
}

/// User creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

impl User {
    /// Build a user record from an insert request. New accounts start unverified.
    pub fn from_insert(id: i32, insert: InsertUser) -> Self {
        Self {
            id,
            username: insert.username,
            password: insert.password,
            email: insert.email,
            is_verified: false,
            date_of_birth: insert.date_of_birth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_not_serialized() {
        let user = User::from_insert(
            1,
            InsertUser {
                username: "vaper".to_string(),
                password: "hunter2".to_string(),
                email: Some("vaper@example.com".to_string()),
                date_of_birth: None,
            },
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "vaper");
        assert_eq!(json["isVerified"], false);
    }
}
