use serde::{Deserialize, Serialize};
use std::fmt;

/// Tenant-scoped user role.
///
/// Hierarchy, from widest to narrowest authority:
/// - `super_admin`: full system access across all tenants
/// - `admin`: full access within their tenant
/// - `manager`: can manage employees, assets, and workflows
/// - `employee`: can view assigned assets and complete workflows
/// - `viewer`: read-only access to resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    Employee,
    Viewer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Locked,
}

/// The authenticated user's identity as carried in the session.
///
/// This is the shape returned by the auth endpoints; the richer
/// administrative view of a user account lives with the users endpoint
/// module in the client crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<String>,
    /// Tenant slug (e.g. "acme").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl User {
    /// Display name used in headers and activity rows.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_snake_case() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");
        let role: Role = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn user_deserializes_with_optional_fields_absent() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-1",
                "email": "kim@example.com",
                "first_name": "Kim",
                "last_name": "Reyes",
                "role": "viewer",
                "status": "active"
            }"#,
        )
        .unwrap();
        assert_eq!(user.full_name(), "Kim Reyes");
        assert_eq!(user.role, Role::Viewer);
        assert!(user.tenant_id.is_none());
    }
}
