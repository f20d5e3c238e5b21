//! User-facing notices. Every failure caught at a command boundary ends up
//! here; nothing is persisted.

use crate::errors::AppError;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Title for the notice shown when `e` aborts an action.
pub fn error_title(e: &AppError) -> &'static str {
    match e {
        AppError::SessionAbsent => "Session Expired",
        AppError::PermissionDenied(_) => "Permission Denied",
        AppError::Timeout(_) | AppError::Http(_) => "Network Error",
        AppError::Api { .. } | AppError::Rejected(_) => "Request Failed",
        AppError::Cancelled => "Cancelled",
        AppError::InvalidQuantity(_)
        | AppError::InsufficientStock(_)
        | AppError::InvalidStatus(_)
        | AppError::InvalidDate(_)
        | AppError::Validation(_) => "Invalid Input",
        _ => "Error",
    }
}

/// Blocking notice for a failed action: `<title>: <context> (<cause>)`.
pub fn failure(context: &str, e: &AppError) -> String {
    format!("{}: {} ({})", error_title(e), context, e)
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", FG_BLUE, BOLD, msg, RESET);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_the_error_taxonomy() {
        assert_eq!(error_title(&AppError::SessionAbsent), "Session Expired");
        assert_eq!(
            error_title(&AppError::InsufficientStock("x".into())),
            "Invalid Input"
        );
        assert_eq!(error_title(&AppError::Timeout("t".into())), "Network Error");
        assert_eq!(
            failure("Failed to fetch assigned tasks.", &AppError::Cancelled),
            "Cancelled: Failed to fetch assigned tasks. (Operation cancelled)"
        );
    }
}
