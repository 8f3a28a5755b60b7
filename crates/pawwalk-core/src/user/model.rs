//! Session user domain model.
//!
//! Authentication is local and demo-only: any credentials log in, and a
//! password is never written to storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name given to users created by `login`.
pub const GUEST_NAME: &str = "Guest";

/// The locally "logged in" identity. Absence means logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_name: Option<String>,
}

impl SessionUser {
    /// Builds the user for a registration. The password is dropped here.
    pub fn from_registration(registration: Registration) -> Self {
        let dog_name = registration
            .dog_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            id: new_user_id(),
            name: registration.name.trim().to_string(),
            email: registration.email.trim().to_string(),
            dog_name,
        }
    }

    /// Builds a guest user for a login. The password is ignored.
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            id: new_user_id(),
            name: GUEST_NAME.to_string(),
            email: credentials.email.trim().to_string(),
            dog_name: None,
        }
    }
}

fn new_user_id() -> String {
    format!("u_{}", Uuid::new_v4().simple())
}

/// Login form input.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Register form input.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub dog_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_trims_and_drops_password() {
        let user = SessionUser::from_registration(Registration {
            name: "  Jo ".to_string(),
            email: " jo@example.com ".to_string(),
            password: "hunter22".to_string(),
            dog_name: Some(" Biscuit ".to_string()),
        });

        assert!(user.id.starts_with("u_"));
        assert_eq!(user.name, "Jo");
        assert_eq!(user.email, "jo@example.com");
        assert_eq!(user.dog_name.as_deref(), Some("Biscuit"));

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hunter22"));
        assert!(!json.to_lowercase().contains("password"));
    }

    #[test]
    fn test_blank_dog_name_is_absent() {
        let user = SessionUser::from_registration(Registration {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            dog_name: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(user.dog_name.is_none());
    }

    #[test]
    fn test_login_creates_guest() {
        let user = SessionUser::from_credentials(Credentials::new("a@b.com ", "x"));
        assert_eq!(user.name, GUEST_NAME);
        assert_eq!(user.email, "a@b.com");
    }
}
