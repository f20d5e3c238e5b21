//! Persistence of the single session identifier.

use crate::errors::{AppError, AppResult};
use crate::models::user::UserId;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key under which the identifier is stored.
pub const SESSION_KEY: &str = "userId";

pub trait SessionStore {
    fn save(&self, id: &UserId) -> AppResult<()>;
    fn get(&self) -> AppResult<Option<UserId>>;
    fn clear(&self) -> AppResult<()>;
}

/// Identity-bound operations start here: an absent identifier is a hard failure.
pub fn require_user(store: &dyn SessionStore) -> AppResult<UserId> {
    store.get()?.ok_or(AppError::SessionAbsent)
}

/// JSON file `{ "userId": "42" }`, readable by the owner only on Unix.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> AppResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, id: &UserId) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut map = BTreeMap::new();
        map.insert(SESSION_KEY.to_string(), id.as_str().to_string());
        let mut file = open_private(&self.path)?;
        file.write_all(serde_json::to_string_pretty(&map)?.as_bytes())?;

        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn get(&self) -> AppResult<Option<UserId>> {
        let map = self.read_map()?;
        Ok(map
            .get(SESSION_KEY)
            .filter(|v| !v.trim().is_empty())
            .map(|v| UserId::new(v.trim())))
    }

    fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Truncate or create `path` readable by the owner only. A file left by an
/// older version keeps its inode, so its mode is narrowed before writing.
#[cfg(unix)]
fn open_private(path: &Path) -> AppResult<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> AppResult<File> {
    Ok(File::create(path)?)
}

/// In-process store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    id: RefCell<Option<UserId>>,
}

impl MemorySessionStore {
    pub fn with_user(id: &str) -> Self {
        Self {
            id: RefCell::new(Some(UserId::new(id))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, id: &UserId) -> AppResult<()> {
        *self.id.borrow_mut() = Some(id.clone());
        Ok(())
    }

    fn get(&self) -> AppResult<Option<UserId>> {
        Ok(self.id.borrow().clone())
    }

    fn clear(&self) -> AppResult<()> {
        *self.id.borrow_mut() = None;
        Ok(())
    }
}
