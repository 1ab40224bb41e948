//! REST client for the remote departments API.
//!
//! One method per endpoint, all rooted at `{base}/departments`. Any non-2xx
//! response is mapped to [`AppError::Api`] with the status and a snippet of
//! the body; no retries, no pagination, no auth.

use std::time::Duration;

use serde_json::json;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Department, NewDepartment, UpdateDepartment};

/// How much of an error body to keep for diagnostics.
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client for the department resource.
#[derive(Debug, Clone)]
pub struct DepartmentsApi {
    http: reqwest::Client,
    base_url: String,
}

impl DepartmentsApi {
    /// Build a client from process configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self::with_client(http, &config.api_base_url))
    }

    /// Build a client around an existing `reqwest::Client` and base URL.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL (for display).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/departments{}", self.base_url, path)
    }

    /// GET /departments - fetch the full record collection.
    pub async fn list(&self) -> Result<Vec<Department>, AppError> {
        let resp = self.http.get(self.url("")).send().await?;
        decode(resp).await
    }

    /// GET /departments/{id} - fetch a single record.
    pub async fn get(&self, id: i64) -> Result<Department, AppError> {
        let resp = self.http.get(self.url(&format!("/{id}"))).send().await?;
        decode(resp).await
    }

    /// POST /departments - create a record from a draft.
    pub async fn create(&self, draft: &NewDepartment) -> Result<Department, AppError> {
        let resp = self.http.post(self.url("")).json(draft).send().await?;
        decode(resp).await
    }

    /// PUT /departments/{id} - partially update a record.
    pub async fn update(&self, id: i64, changes: &UpdateDepartment) -> Result<Department, AppError> {
        let resp = self
            .http
            .put(self.url(&format!("/{id}")))
            .json(changes)
            .send()
            .await?;
        decode(resp).await
    }

    /// DELETE /departments/{id} - delete a single record.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let resp = self.http.delete(self.url(&format!("/{id}"))).send().await?;
        check(resp).await
    }

    /// POST /departments/delete-many - delete every record in `ids`.
    pub async fn delete_many(&self, ids: &[i64]) -> Result<(), AppError> {
        let resp = self
            .http
            .post(self.url("/delete-many"))
            .json(&json!({ "ids": ids }))
            .send()
            .await?;
        check(resp).await
    }
}

/// Fail on non-2xx, otherwise decode the JSON body.
async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, AppError> {
    let resp = into_result(resp).await?;
    Ok(resp.json().await?)
}

/// Fail on non-2xx, discarding any body.
async fn check(resp: reqwest::Response) -> Result<(), AppError> {
    into_result(resp).await.map(|_| ())
}

async fn into_result(resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let mut message = resp.text().await.unwrap_or_default();
    message.truncate(ERROR_BODY_LIMIT);
    tracing::error!(status = status.as_u16(), %message, "API request failed");
    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}
