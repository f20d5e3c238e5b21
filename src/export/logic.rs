// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::{AttendanceExport, ExportRow, TaskExport};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::attendance::AttendanceRecord;
use crate::models::task::Task;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the currently visible rows of a screen.
pub struct ExportLogic;

impl ExportLogic {
    /// Settle overwrite questions before the screen starts listening for Ctrl-C.
    pub fn confirm_target(file: &str, force: bool) -> AppResult<()> {
        ensure_writable(Path::new(file), force)
    }

    pub fn export_tasks(tasks: &[Task], format: ExportFormat, file: &str) -> AppResult<()> {
        let rows: Vec<TaskExport> = tasks.iter().map(TaskExport::from).collect();
        Self::write("Task", &rows, format, file)
    }

    pub fn export_attendance(
        records: &[AttendanceRecord],
        format: ExportFormat,
        file: &str,
    ) -> AppResult<()> {
        let rows: Vec<AttendanceExport> = records.iter().map(AttendanceExport::from).collect();
        Self::write("Attendance", &rows, format, file)
    }

    fn write<R: ExportRow>(label: &str, rows: &[R], format: ExportFormat, file: &str) -> AppResult<()> {
        let path = Path::new(file);

        if rows.is_empty() {
            warning("No rows match the current filter: nothing exported.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(path, rows)?,
            ExportFormat::Json => write_json(path, rows)?,
        }

        notify_export_success(label, rows.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task_status::{Priority, TaskStatus};
    use chrono::NaiveDate;

    fn sample_task() -> Task {
        Task {
            id: 3,
            title: "Replace valve, unit B".into(),
            description: String::new(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            created_by: Some(serde_json::json!("admin")),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            feedback: None,
        }
    }

    #[test]
    fn csv_export_quotes_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");
        let file = path.to_string_lossy().to_string();

        ExportLogic::export_tasks(&[sample_task()], ExportFormat::Csv, &file).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,title,status,priority,start_date,end_date,created_by,feedback"
        );
        assert_eq!(
            lines.next().unwrap(),
            "3,\"Replace valve, unit B\",In Progress,High,2024-05-01,2024-05-03,admin,"
        );
    }

    #[test]
    fn json_export_has_derived_attendance_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.json");
        let file = path.to_string_lossy().to_string();

        let record = AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            check_in: Some("2024-05-02T08:00:00".into()),
            check_in_location: None,
            check_out: None,
            check_out_location: None,
        };
        ExportLogic::export_attendance(&[record], ExportFormat::Json, &file).unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v[0]["status"], "Checked In");
        assert_eq!(v[0]["date"], "2024-05-02");
    }

    #[test]
    fn empty_selection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.csv");
        ExportLogic::export_tasks(&[], ExportFormat::Csv, &path.to_string_lossy()).unwrap();
        assert!(!path.exists());
    }
}
