//! reqwest-backed `ApiClient`.

use super::{ApiClient, MultipartForm};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub struct HttpApiClient {
    base_url: String,
    client: Client,
}

impl HttpApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid api_url '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "invalid api_url '{}': only http and https are supported",
                base_url
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, method: &str, path: &str, req: RequestBuilder) -> AppResult<Value> {
        debug!(method, path, "request");
        let resp = req.send().await.map_err(map_transport)?;
        decode(method, path, resp).await
    }
}

fn map_transport(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout(e.to_string())
    } else {
        AppError::Http(e)
    }
}

/// Success statuses yield the JSON body (Null when empty); anything else
/// becomes `AppError::Api` carrying the server's `message` when there is one.
async fn decode(method: &str, path: &str, resp: Response) -> AppResult<Value> {
    let status = resp.status();
    let text = resp.text().await.map_err(map_transport)?;
    debug!(method, path, status = status.as_u16(), bytes = text.len(), "response");

    let body: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(e) if status.is_success() => return Err(AppError::Json(e)),
            Err(_) => Value::String(text.clone()),
        }
    };

    if status.is_success() {
        return Ok(body);
    }

    let message = match &body {
        Value::Object(map) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
    .unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });

    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}

fn to_reqwest_form(form: MultipartForm) -> AppResult<Form> {
    let mut out = Form::new();
    for (name, value) in form.fields {
        out = out.text(name, value);
    }
    for file in form.files {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)?;
        out = out.part(file.field, part);
    }
    Ok(out)
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str) -> AppResult<Value> {
        let req = self.client.get(self.url_for(path));
        self.send("GET", path, req).await
    }

    async fn post(&self, path: &str, body: Value) -> AppResult<Value> {
        let req = self.client.post(self.url_for(path)).json(&body);
        self.send("POST", path, req).await
    }

    async fn put(&self, path: &str, body: Value) -> AppResult<Value> {
        let req = self.client.put(self.url_for(path)).json(&body);
        self.send("PUT", path, req).await
    }

    async fn put_multipart(&self, path: &str, form: MultipartForm) -> AppResult<Value> {
        let req = self
            .client
            .put(self.url_for(path))
            .multipart(to_reqwest_form(form)?);
        self.send("PUT", path, req).await
    }
}
