//! User record and draft models matching the `/users` resource.

use serde::{Deserialize, Serialize};

/// Account status of a user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Status::Active),
            "inactive" => Some(Status::Inactive),
            _ => None,
        }
    }
}

/// A persisted user. `id` and `created_at` are assigned by the server and never change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: Status,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Form input for creating or updating a user.
///
/// Fields hold raw input; `status` stays a string so that validation can reject
/// anything other than `active` or `inactive`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: String::new(),
            status: Status::Active.as_str().to_string(),
            phone: None,
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status.as_str().to_string(),
            phone: user.phone.clone(),
        }
    }
}

/// Request body for creating a user.
///
/// Carries a `createdAt` date for servers that do not assign one; the record the
/// server returns is authoritative either way.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest<'a> {
    #[serde(flatten)]
    pub draft: &'a UserDraft,
    pub created_at: String,
}

/// One page of users together with the server-reported total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub data: Vec<User>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_json_shape() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "name": "Ann",
            "email": "a@x.com",
            "role": "admin",
            "status": "inactive",
            "createdAt": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(user.status, Status::Inactive);
        assert_eq!(user.created_at, "2024-01-01");
        assert!(user.phone.is_none());

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["createdAt"], "2024-01-01");
        assert!(back.get("phone").is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<User>(json!({
            "id": 1,
            "name": "Ann",
            "email": "a@x.com",
            "role": "admin",
            "status": "banned",
            "createdAt": "2024-01-01"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_from_user_prefills_form() {
        let user = User {
            id: 3,
            name: "Bob".into(),
            email: "b@x.com".into(),
            role: "user".into(),
            status: Status::Inactive,
            created_at: "2024-01-02".into(),
            phone: Some("+15551234567".into()),
        };

        let draft = UserDraft::from(&user);
        assert_eq!(draft.name, "Bob");
        assert_eq!(draft.status, "inactive");
        assert_eq!(draft.phone.as_deref(), Some("+15551234567"));
    }

    #[test]
    fn test_create_request_flattens_draft() {
        let draft = UserDraft {
            name: "Ann".into(),
            email: "a@x.com".into(),
            role: "admin".into(),
            ..UserDraft::default()
        };
        let body = serde_json::to_value(CreateUserRequest {
            draft: &draft,
            created_at: "2024-05-06".into(),
        })
        .unwrap();

        assert_eq!(body["name"], "Ann");
        assert_eq!(body["status"], "active");
        assert_eq!(body["createdAt"], "2024-05-06");
        assert!(body.get("id").is_none());
    }
}
