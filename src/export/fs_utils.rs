// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check that `path` may be created or overwritten.
///
/// - directory → error, even with `force`
/// - missing file, or `force` → Ok
/// - existing file → ask on stdin
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    ensure_writable_with(path, force, &mut lock)
}

/// Same as [`ensure_writable`], reading the answer from `input`.
pub fn ensure_writable_with(path: &Path, force: bool, input: &mut dyn BufRead) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory",
            path.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        )),
    }
}
