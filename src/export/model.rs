// src/export/model.rs

use crate::core::attendance::derive_status;
use crate::models::attendance::AttendanceRecord;
use crate::models::task::Task;
use serde::Serialize;

/// Flat row for task exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TaskExport {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub start_date: String,
    pub end_date: String,
    pub created_by: String,
    pub feedback: String,
}

impl From<&Task> for TaskExport {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id,
            title: t.title.clone(),
            status: t.status.as_str().to_string(),
            priority: t.priority.as_str().to_string(),
            start_date: t.start_date.format("%Y-%m-%d").to_string(),
            end_date: t.end_date.format("%Y-%m-%d").to_string(),
            created_by: t.creator(),
            feedback: t.feedback.clone().unwrap_or_default(),
        }
    }
}

/// Flat row for attendance exports; `status` is the derived one.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AttendanceExport {
    pub date: String,
    pub status: String,
    pub check_in: String,
    pub check_in_location: String,
    pub check_out: String,
    pub check_out_location: String,
}

impl From<&AttendanceRecord> for AttendanceExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            status: derive_status(r).as_str().to_string(),
            check_in: r.check_in.clone().unwrap_or_default(),
            check_in_location: r.check_in_location.clone().unwrap_or_default(),
            check_out: r.check_out.clone().unwrap_or_default(),
            check_out_location: r.check_out_location.clone().unwrap_or_default(),
        }
    }
}

/// Row shape shared by the CSV writer.
pub(crate) trait ExportRow: Serialize {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl ExportRow for TaskExport {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "title",
            "status",
            "priority",
            "start_date",
            "end_date",
            "created_by",
            "feedback",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.status.clone(),
            self.priority.clone(),
            self.start_date.clone(),
            self.end_date.clone(),
            self.created_by.clone(),
            self.feedback.clone(),
        ]
    }
}

impl ExportRow for AttendanceExport {
    fn headers() -> &'static [&'static str] {
        &[
            "date",
            "status",
            "check_in",
            "check_in_location",
            "check_out",
            "check_out_location",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.status.clone(),
            self.check_in.clone(),
            self.check_in_location.clone(),
            self.check_out.clone(),
            self.check_out_location.clone(),
        ]
    }
}
