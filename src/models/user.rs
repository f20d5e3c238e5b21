use serde::{Deserialize, Serialize};

/// The session identifier: an opaque user id, kept as text exactly as the
/// server and the session file carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: LoggedUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggedUser {
    pub id: serde_json::Value,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoggedUser {
    /// The id arrives as a number; a string id is accepted as-is.
    pub fn user_id(&self) -> Option<UserId> {
        match &self.id {
            serde_json::Value::Number(n) => Some(UserId::new(n.to_string())),
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(UserId::new(s.trim())),
            _ => None,
        }
    }

    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("user {}", self.id))
    }
}

/// `{ "message": "..." }` envelope returned by every mutating endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
