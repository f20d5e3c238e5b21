//! Typed wrappers over the REST endpoints the client consumes.

use super::{ApiClient, FilePart, MultipartForm};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, Punch};
use crate::models::inventory::{InventoryItem, UsageReport};
use crate::models::project::{Project, ProjectStatusUpdate};
use crate::models::task::{StatusUpdate, Task, TaskRef};
use crate::models::user::{LoginRequest, LoginResponse, MessageResponse, UserId};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

pub const TASK_STATUS_UPDATED: &str = "Task status updated successfully";
pub const PROJECT_UPDATED: &str = "Project updated successfully";

fn decode<T: DeserializeOwned>(value: Value) -> AppResult<T> {
    Ok(serde_json::from_value(value)?)
}

fn message_of(value: Value) -> String {
    serde_json::from_value::<MessageResponse>(value)
        .map(|m| m.message)
        .unwrap_or_default()
}

/// Mutations report success through an exact message; anything else is a rejection.
fn expect_message(value: Value, expected: &str) -> AppResult<String> {
    let message = message_of(value);
    if message == expected {
        Ok(message)
    } else if message.is_empty() {
        Err(AppError::Rejected("empty response".to_string()))
    } else {
        Err(AppError::Rejected(message))
    }
}

pub async fn login(api: &dyn ApiClient, identifier: &str, password: &str) -> AppResult<LoginResponse> {
    let body = serde_json::to_value(LoginRequest {
        identifier,
        password,
    })?;
    decode(api.post("/users/login", body).await?)
}

// ---------------------------
// Tasks
// ---------------------------

pub async fn assigned_tasks(api: &dyn ApiClient, user: &UserId) -> AppResult<Vec<Task>> {
    decode(api.get(&format!("/tasks/assigned/{}", user)).await?)
}

pub async fn all_tasks(api: &dyn ApiClient) -> AppResult<Vec<TaskRef>> {
    decode(api.get("/tasks").await?)
}

pub async fn update_task_status(
    api: &dyn ApiClient,
    task_id: i64,
    status: &str,
    location: Option<&str>,
) -> AppResult<String> {
    let body = serde_json::to_value(StatusUpdate { status, location })?;
    let resp = api.put(&format!("/tasks/{}/status", task_id), body).await?;
    expect_message(resp, TASK_STATUS_UPDATED)
}

// ---------------------------
// Projects
// ---------------------------

pub async fn assigned_projects(api: &dyn ApiClient, user: &UserId) -> AppResult<Vec<Project>> {
    decode(api.get(&format!("/project/assigned/{}", user)).await?)
}

pub async fn update_project_status(
    api: &dyn ApiClient,
    project_id: i64,
    status: &str,
) -> AppResult<String> {
    let body = serde_json::to_value(ProjectStatusUpdate { project_id, status })?;
    let resp = api
        .put(&format!("/project/assigned/{}", project_id), body)
        .await?;
    expect_message(resp, PROJECT_UPDATED)
}

/// Images are (bytes, mime) pairs; parts are named `project_{id}_{index}.jpg`.
pub async fn upload_project_images(
    api: &dyn ApiClient,
    project_id: i64,
    status: &str,
    images: Vec<(Vec<u8>, String)>,
) -> AppResult<String> {
    if images.is_empty() {
        return Err(AppError::Validation("No images to upload.".to_string()));
    }

    let mut form = MultipartForm::new()
        .text("project_id", project_id.to_string())
        .text("status", status);

    for (index, (bytes, mime)) in images.into_iter().enumerate() {
        form = form.file(FilePart {
            field: "images".to_string(),
            file_name: format!("project_{}_{}.jpg", project_id, index),
            mime,
            bytes,
        });
    }

    let resp = api
        .put_multipart(&format!("/project/assigned/{}", project_id), form)
        .await?;
    expect_message(resp, PROJECT_UPDATED)
}

// ---------------------------
// Attendance
// ---------------------------

pub async fn punch(api: &dyn ApiClient, user: &UserId, punch: Punch, location: &str) -> AppResult<String> {
    let mut body = serde_json::Map::new();
    body.insert("user_id".to_string(), json!(user.as_str()));
    body.insert(punch.location_field().to_string(), json!(location));

    let resp = api
        .post(&format!("/attendance/{}", punch.endpoint()), Value::Object(body))
        .await?;
    Ok(message_of(resp))
}

pub async fn attendance_records(api: &dyn ApiClient, user: &UserId) -> AppResult<Vec<AttendanceRecord>> {
    decode(api.get(&format!("/attendance/user/{}", user)).await?)
}

// ---------------------------
// Inventory
// ---------------------------

pub async fn inventory_items(api: &dyn ApiClient) -> AppResult<Vec<InventoryItem>> {
    decode(api.get("/inventory/items").await?)
}

pub async fn inventory_categories(api: &dyn ApiClient) -> AppResult<Vec<String>> {
    decode(api.get("/inventory/categories").await?)
}

pub async fn submit_usage(api: &dyn ApiClient, report: &UsageReport) -> AppResult<String> {
    let resp = api
        .post("/inventory/usage", serde_json::to_value(report)?)
        .await?;
    Ok(message_of(resp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_success_message_is_required() {
        assert!(expect_message(json!({"message": TASK_STATUS_UPDATED}), TASK_STATUS_UPDATED).is_ok());
        assert!(matches!(
            expect_message(json!({"message": "Task not found"}), TASK_STATUS_UPDATED),
            Err(AppError::Rejected(m)) if m == "Task not found"
        ));
        assert!(matches!(
            expect_message(Value::Null, PROJECT_UPDATED),
            Err(AppError::Rejected(_))
        ));
    }
}
