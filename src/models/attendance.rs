use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(deserialize_with = "date::de_server_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<String>, // raw timestamp text, searched as-is
    #[serde(default)]
    pub check_in_location: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub check_out_location: Option<String>,
}

impl AttendanceRecord {
    pub fn has_check_in(&self) -> bool {
        present(&self.check_in)
    }

    pub fn has_check_out(&self) -> bool {
        present(&self.check_out)
    }
}

fn present(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Display status derived from the two timestamps; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    Complete,
    CheckedIn,
    Incomplete,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Complete => "Complete",
            AttendanceStatus::CheckedIn => "Checked In",
            AttendanceStatus::Incomplete => "Incomplete",
        }
    }
}

/// Which end of the working day an attendance punch records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punch {
    CheckIn,
    CheckOut,
}

impl Punch {
    /// Path segment under `/attendance/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Punch::CheckIn => "check-in",
            Punch::CheckOut => "check-out",
        }
    }

    pub fn location_field(&self) -> &'static str {
        match self {
            Punch::CheckIn => "check_in_location",
            Punch::CheckOut => "check_out_location",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Punch::CheckIn => "check in",
            Punch::CheckOut => "check out",
        }
    }
}
