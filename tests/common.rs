#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home directory: the binary never sees the developer's config or session.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("temp home"),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.home.path().join("session.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".fieldops").join("fieldops.conf")
    }

    /// Store a session identifier the way `login` does.
    pub fn login_as(&self, user_id: &str) {
        fs::write(
            self.session_path(),
            format!("{{\"userId\": \"{}\"}}", user_id),
        )
        .expect("write session");
    }

    /// `fieldops` with HOME pointed at the sandbox and an unroutable API.
    pub fn fo(&self) -> Command {
        self.fo_at("http://127.0.0.1:9/api")
    }

    /// Same as [`Sandbox::fo`] against another API base URL.
    pub fn fo_at(&self, api_url: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("fieldops");
        cmd.env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .args([
                "--session",
                &self.session_path().to_string_lossy(),
                "--api-url",
                api_url,
            ]);
        cmd
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}
