use serde::{Deserialize, Serialize};

/// Lifecycle state of a task as reported by the server.
///
/// Values the client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Delayed,
    Other(String),
}

impl TaskStatus {
    /// The four values a user may set.
    pub const OPTIONS: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Delayed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Delayed => "Delayed",
            TaskStatus::Other(s) => s,
        }
    }

    /// Parse a status typed on the command line (case and separator insensitive).
    /// Returns None for anything outside the four known options.
    pub fn from_input(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();

        match norm.as_str() {
            "pending" => Some(TaskStatus::Pending),
            "inprogress" => Some(TaskStatus::InProgress),
            "completed" | "done" => Some(TaskStatus::Completed),
            "delayed" => Some(TaskStatus::Delayed),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "⏳",
            TaskStatus::InProgress => "🔄",
            TaskStatus::Completed => "✅",
            TaskStatus::Delayed => "⚠️",
            TaskStatus::Other(_) => "•",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => TaskStatus::Pending,
            "In Progress" => TaskStatus::InProgress,
            "Completed" => TaskStatus::Completed,
            "Delayed" => TaskStatus::Delayed,
            _ => TaskStatus::Other(s),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(s: TaskStatus) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(s) => s,
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            _ => Priority::Other(s),
        }
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_to_variants() {
        let s: TaskStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(s, TaskStatus::InProgress);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"In Progress\"");
    }

    #[test]
    fn unknown_status_is_preserved() {
        let s: TaskStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(s, TaskStatus::Other("On Hold".into()));
        assert_eq!(s.as_str(), "On Hold");
    }

    #[test]
    fn cli_input_is_lenient() {
        assert_eq!(TaskStatus::from_input("in-progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::from_input("In Progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::from_input("COMPLETED"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::from_input("archived"), None);
    }
}
