use super::task_status::{Priority, TaskStatus};
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(default)]
    pub created_by: Option<serde_json::Value>,
    #[serde(deserialize_with = "date::de_server_date")]
    pub start_date: NaiveDate, // ⇔ tasks.start_date, truncated to the local day
    #[serde(deserialize_with = "date::de_server_date")]
    pub end_date: NaiveDate, // ⇔ tasks.end_date, truncated to the local day
    #[serde(default)]
    pub feedback: Option<String>,
}

impl Task {
    /// `created_by` is a user reference: a name on some deployments, an id on others.
    pub fn creator(&self) -> String {
        match &self.created_by {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => "-".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Minimal task reference returned by `GET /tasks`, used to pick the task a
/// usage report belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRef {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate<'a> {
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
}
