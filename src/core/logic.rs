//! Screen controllers: each function is one user action, fetching through
//! `ApiClient`, reading identity from `SessionStore` and handing back value
//! types for the command layer to render.

use crate::api::{ApiClient, endpoints};
use crate::config::Config;
use crate::core::attendance::AttendanceHistory;
use crate::core::inventory::InventoryCatalog;
use crate::core::location::{LocationProvider, acquire_location};
use crate::core::screen::Screen;
use crate::core::tasks::{TaskBoard, TaskFilter};
use crate::core::usage::UsageDraft;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::Punch;
use crate::models::location::LocationCapture;
use crate::models::project::{Project, ProjectStatus};
use crate::models::task::TaskRef;
use crate::models::task_status::TaskStatus;
use crate::models::user::{LoggedUser, UserId};
use crate::session::{SessionStore, require_user};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info};

/// Everything an action needs besides its own arguments.
pub struct Context {
    pub config: Config,
    pub api: Box<dyn ApiClient>,
    pub session: Box<dyn SessionStore>,
    /// Reference day for date buckets; the local date in production.
    pub today: NaiveDate,
}

impl Context {
    pub fn user(&self) -> AppResult<UserId> {
        require_user(self.session.as_ref())
    }

    fn api(&self) -> &dyn ApiClient {
        self.api.as_ref()
    }
}

// ---------------------------
// Session
// ---------------------------

pub async fn login(
    ctx: &Context,
    screen: &Screen,
    identifier: &str,
    password: &str,
) -> AppResult<LoggedUser> {
    if identifier.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Username/email and password are required.".to_string(),
        ));
    }

    let resp = screen
        .run(endpoints::login(ctx.api(), identifier.trim(), password))
        .await
        .map_err(|e| match e {
            AppError::Api { status, .. } if status == 400 || status == 401 => AppError::Validation(
                "Invalid username/email or password.".to_string(),
            ),
            other => other,
        })?;

    let id = resp
        .user
        .user_id()
        .ok_or_else(|| AppError::Rejected("login response carries no user id".to_string()))?;
    ctx.session.save(&id)?;
    info!(user = %id, "logged in");

    Ok(resp.user)
}

// ---------------------------
// Tasks
// ---------------------------

pub async fn task_board(ctx: &Context, screen: &Screen, filter: TaskFilter) -> AppResult<TaskBoard> {
    let user = ctx.user()?;
    let tasks = screen.run(endpoints::assigned_tasks(ctx.api(), &user)).await?;
    debug!(count = tasks.len(), "assigned tasks fetched");
    Ok(TaskBoard::new(tasks, filter, ctx.today))
}

/// Set a task's status, recording where the user was. A missing position
/// does not block the update; the location is simply omitted.
pub async fn update_task_status(
    ctx: &Context,
    screen: &Screen,
    location: &dyn LocationProvider,
    task_id: i64,
    status_input: &str,
) -> AppResult<(String, LocationCapture)> {
    let status = TaskStatus::from_input(status_input)
        .ok_or_else(|| AppError::InvalidStatus(status_input.to_string()))?;

    let capture = screen
        .run(async { Ok(acquire_location(location, ctx.config.location_timeout()).await) })
        .await?;
    let url = capture.url();

    let message = screen
        .run(endpoints::update_task_status(
            ctx.api(),
            task_id,
            status.as_str(),
            url.as_deref(),
        ))
        .await?;

    Ok((message, capture))
}

// ---------------------------
// Projects
// ---------------------------

pub async fn assigned_projects(ctx: &Context, screen: &Screen) -> AppResult<Vec<Project>> {
    let user = ctx.user()?;
    screen.run(endpoints::assigned_projects(ctx.api(), &user)).await
}

pub async fn set_project_status(
    ctx: &Context,
    screen: &Screen,
    project_id: i64,
    status_input: &str,
) -> AppResult<String> {
    let status = ProjectStatus::from_input(status_input)
        .ok_or_else(|| AppError::InvalidStatus(status_input.to_string()))?;

    screen
        .run(endpoints::update_project_status(
            ctx.api(),
            project_id,
            status.as_str(),
        ))
        .await
}

fn image_mime(path: &Path) -> AppResult<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "heic" => Ok("image/heic"),
        _ => Err(AppError::Validation(format!(
            "'{}' is not a supported image (jpg, jpeg, png, heic)",
            path.display()
        ))),
    }
}

/// Upload images; when no status is given the project's current one is sent.
pub async fn upload_project_images(
    ctx: &Context,
    screen: &Screen,
    project_id: i64,
    files: &[String],
    status_input: Option<&str>,
) -> AppResult<String> {
    if files.is_empty() {
        return Err(AppError::Validation("No images to upload.".to_string()));
    }

    let status = match status_input {
        Some(s) => ProjectStatus::from_input(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))?,
        None => {
            let projects = assigned_projects(ctx, screen).await?;
            projects
                .into_iter()
                .find(|p| p.id == project_id)
                .map(|p| p.status)
                .ok_or_else(|| {
                    AppError::Validation(format!("Project {} is not assigned to you.", project_id))
                })?
        }
    };

    let mut images = Vec::with_capacity(files.len());
    for f in files {
        let path = Path::new(f);
        let mime = image_mime(path)?;
        let bytes = tokio::fs::read(path).await?;
        images.push((bytes, mime.to_string()));
    }

    screen
        .run(endpoints::upload_project_images(
            ctx.api(),
            project_id,
            status.as_str(),
            images,
        ))
        .await
}

// ---------------------------
// Attendance
// ---------------------------

pub async fn attendance_history(ctx: &Context, screen: &Screen) -> AppResult<AttendanceHistory> {
    let user = ctx.user()?;
    let records = screen
        .run(endpoints::attendance_records(ctx.api(), &user))
        .await?;
    Ok(AttendanceHistory::new(records))
}

/// Check in or out. Today's record decides whether the punch is allowed;
/// the location fails soft to `Unavailable`.
pub async fn punch(
    ctx: &Context,
    screen: &Screen,
    location: &dyn LocationProvider,
    kind: Punch,
) -> AppResult<(String, LocationCapture)> {
    let user = ctx.user()?;

    let history = attendance_history(ctx, screen).await?;
    history.ensure_punch_allowed(kind, ctx.today)?;

    let capture = screen
        .run(async { Ok(acquire_location(location, ctx.config.location_timeout()).await) })
        .await?;

    let message = screen
        .run(endpoints::punch(ctx.api(), &user, kind, &capture.to_wire()))
        .await?;

    Ok((message, capture))
}

// ---------------------------
// Inventory
// ---------------------------

/// Items and categories are fetched together.
pub async fn inventory_catalog(ctx: &Context, screen: &Screen) -> AppResult<InventoryCatalog> {
    let api = ctx.api();
    let (items, categories) = screen
        .run(async {
            tokio::try_join!(
                endpoints::inventory_items(api),
                endpoints::inventory_categories(api)
            )
        })
        .await?;
    Ok(InventoryCatalog::new(items, categories))
}

pub async fn report_tasks(ctx: &Context, screen: &Screen) -> AppResult<Vec<TaskRef>> {
    screen.run(endpoints::all_tasks(ctx.api())).await
}

/// `ITEM_ID:QTY` → (item id, raw quantity text)
pub fn parse_item_spec(spec: &str) -> AppResult<(i64, &str)> {
    let (id, qty) = spec.split_once(':').ok_or_else(|| {
        AppError::Validation(format!("'{}' must look like ITEM_ID:QUANTITY", spec))
    })?;
    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("'{}' is not an item id", id.trim())))?;
    Ok((id, qty))
}

/// Apply adds, then edits, then removals to a fresh draft.
pub fn build_usage_draft(
    catalog: &InventoryCatalog,
    task_id: Option<i64>,
    add: &[String],
    set: &[String],
    remove: &[i64],
) -> AppResult<UsageDraft> {
    let mut draft = UsageDraft::new();
    if let Some(id) = task_id {
        draft.select_task(id);
    }

    for spec in add {
        let (id, qty) = parse_item_spec(spec)?;
        let item = catalog
            .find(id)
            .ok_or_else(|| AppError::Validation(format!("Item {} not found.", id)))?;
        draft.add_raw(item, qty)?;
    }

    for spec in set {
        let (id, qty) = parse_item_spec(spec)?;
        let qty = crate::core::usage::parse_quantity(qty)?;
        draft.set_quantity(id, qty as i64)?;
    }

    for id in remove {
        draft.remove(*id);
    }

    Ok(draft)
}

pub async fn submit_usage(ctx: &Context, screen: &Screen, draft: &UsageDraft) -> AppResult<String> {
    let user = ctx.user()?;
    let report = draft.to_report(&user)?;
    screen.run(endpoints::submit_usage(ctx.api(), &report)).await
}
