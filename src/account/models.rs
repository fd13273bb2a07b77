// src/account/models.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Identity Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Employer,
}

impl Role {
    /// Path segment of the role-specific auth endpoints.
    pub fn auth_segment(&self) -> &'static str {
        match self {
            Role::Candidate => "candidates",
            Role::Employer => "companies",
        }
    }

    /// Key under which the login response carries the profile object.
    pub fn profile_key(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Employer => "company",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The persisted identity: token and user are always set and cleared together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Account store state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Restoring,
    Authenticating,
    Authenticated,
}

// ============================================================================
// Wire Payloads
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile object as the backend sends it inside login and profile responses.
/// The role is implied by the endpoint, not carried in the payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl ProfilePayload {
    pub fn into_user(self, role: Role) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            role,
            avatar: self.avatar,
            location: self.location,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UpdateProfileRequest {
    pub fn to_body(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
