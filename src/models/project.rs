use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    Delayed,
    Other(String),
}

impl ProjectStatus {
    pub const OPTIONS: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::Delayed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Delayed => "delayed",
            ProjectStatus::Other(s) => s,
        }
    }

    /// Parse a CLI value; only the four known options are accepted.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "planning" => Some(ProjectStatus::Planning),
            "in_progress" => Some(ProjectStatus::InProgress),
            "completed" => Some(ProjectStatus::Completed),
            "delayed" => Some(ProjectStatus::Delayed),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ProjectStatus::Other(s) => s.clone(),
            known => {
                let raw = known.as_str().replace('_', " ");
                let mut chars = raw.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => raw,
                }
            }
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "planning" => ProjectStatus::Planning,
            "in_progress" => ProjectStatus::InProgress,
            "completed" => ProjectStatus::Completed,
            "delayed" => ProjectStatus::Delayed,
            _ => ProjectStatus::Other(s),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(s: ProjectStatus) -> Self {
        s.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de_budget")]
    pub budget: f64,
    #[serde(default, deserialize_with = "de_images")]
    pub images: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub assigned_user: Option<serde_json::Value>,
}

/// `PUT /project/assigned/{id}` JSON body for a status change.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatusUpdate<'a> {
    pub project_id: i64,
    pub status: &'a str,
}

/// Budgets arrive as a JSON number or, from numeric SQL columns, as a string.
fn de_budget<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => Ok(n.as_f64().unwrap_or_default()),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid budget '{}'", s))),
        serde_json::Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!(
            "invalid budget {}",
            other
        ))),
    }
}

/// A missing or null image list is an empty list.
fn de_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
