use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portal roles. The role is fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Driver,
    Admin,
}

impl Role {
    /// Parse a wire role. Unknown values yield None and the caller
    /// falls back to the home route.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "CUSTOMER" => Some(Role::Customer),
            "DRIVER" => Some(Role::Driver),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Driver => "DRIVER",
            Role::Admin => "ADMIN",
        }
    }
}

/// The authenticated actor and their profile state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub profile_complete: bool,
}

/// At most one Session exists process-wide, owned by the session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub principal: Principal,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

/// Wire shape of POST /login. The role stays a plain string here so an
/// unrecognized role survives decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub user: AccountInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: Uuid,
    pub email: String,
    pub profile_complete: bool,
}
