//! Remote API access.
//!
//! `ApiClient` is the seam: commands only see deserialized JSON, and tests
//! swap the HTTP implementation for an in-memory one.

pub mod endpoints;
pub mod http;

pub use http::HttpApiClient;

use crate::errors::AppResult;
use async_trait::async_trait;
use serde_json::Value;

/// A file attached to a multipart request.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Transport-independent multipart body.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get(&self, path: &str) -> AppResult<Value>;
    async fn post(&self, path: &str, body: Value) -> AppResult<Value>;
    async fn put(&self, path: &str, body: Value) -> AppResult<Value>;
    async fn put_multipart(&self, path: &str, form: MultipartForm) -> AppResult<Value>;
}
