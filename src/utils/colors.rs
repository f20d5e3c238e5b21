/// Terminal colours for statuses and priorities.
use crate::models::attendance::AttendanceStatus;
use crate::models::project::ProjectStatus;
use crate::models::task_status::{Priority, TaskStatus};
use ansi_term::Colour;

const ORANGE: Colour = Colour::RGB(255, 149, 0);
const BLUE: Colour = Colour::RGB(39, 102, 236);
const GREEN: Colour = Colour::RGB(52, 199, 89);
const RED: Colour = Colour::RGB(255, 59, 48);
const GREY: Colour = Colour::RGB(102, 102, 102);

pub fn color_for_task_status(status: &TaskStatus) -> Colour {
    match status {
        TaskStatus::Pending => ORANGE,
        TaskStatus::InProgress => BLUE,
        TaskStatus::Completed => GREEN,
        TaskStatus::Delayed => RED,
        // unknown statuses fall back to the "in progress" colour
        TaskStatus::Other(_) => BLUE,
    }
}

pub fn color_for_priority(priority: &Priority) -> Colour {
    match priority {
        Priority::High => RED,
        Priority::Medium => ORANGE,
        Priority::Low => GREEN,
        Priority::Other(_) => GREY,
    }
}

pub fn color_for_project_status(status: &ProjectStatus) -> Colour {
    match status {
        ProjectStatus::Planning => ORANGE,
        ProjectStatus::InProgress => BLUE,
        ProjectStatus::Completed => GREEN,
        ProjectStatus::Delayed => RED,
        ProjectStatus::Other(_) => GREY,
    }
}

pub fn color_for_attendance(status: AttendanceStatus) -> Colour {
    match status {
        AttendanceStatus::Complete => Colour::RGB(76, 175, 80),
        AttendanceStatus::CheckedIn => Colour::RGB(255, 152, 0),
        AttendanceStatus::Incomplete => Colour::RGB(244, 67, 54),
    }
}

/// Paint `value` unless colours are disabled (`NO_COLOR`).
pub fn paint(value: &str, colour: Colour) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        value.to_string()
    } else {
        colour.paint(value).to_string()
    }
}

pub fn grey(value: &str) -> String {
    paint(value, GREY)
}
