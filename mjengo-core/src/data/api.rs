//! HTTP client for the site-office backend.
//!
//! Talks to the same REST routes the web dashboard uses. Handles bearer-token
//! forwarding, retries with exponential backoff, and mapping HTTP failures
//! onto `ApiError`. The backend itself is opaque: this client only knows the
//! routes and the JSON shapes in `domain`.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::source::{ApiError, ProjectSnapshot, RecordSource};
use crate::domain::{
    IssuedMaterialRecord, LabourRecord, MaterialRecord, ProjectRecord, RemainingMaterialRecord,
};

/// Default request timeout when the config does not say otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking client for the record store's REST API.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
    max_retries: u32,
    base_delay: Duration,
}

impl ApiClient {
    /// Builds a client against `base_url`, forwarding `token` verbatim as a
    /// bearer credential when present. Issuing and refreshing tokens is the
    /// caller's business.
    pub fn new(base_url: &str, token: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("mjengo/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a JSON payload with retry and backoff.
    ///
    /// Connect/timeout failures and 5xx responses are retried with
    /// exponential backoff; 429 is retried after noting the server's
    /// retry-after; auth failures and 404 fail fast.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.base_delay * 2u32.pow(attempt - 1);
                debug!(%url, attempt, delay_ms = delay.as_millis() as u64, "retrying request");
                std::thread::sleep(delay);
            }

            let mut request = self.client.get(&url);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            match request.send() {
                Ok(resp) => {
                    let status = resp.status();

                    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        let retry_after = resp
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|v| v.parse::<u64>().ok())
                            .unwrap_or(60);
                        warn!(%url, retry_after, "rate limited by backend");
                        last_error = Some(ApiError::RateLimited {
                            retry_after_secs: retry_after,
                        });
                        continue;
                    }

                    if status == reqwest::StatusCode::UNAUTHORIZED
                        || status == reqwest::StatusCode::FORBIDDEN
                    {
                        return Err(ApiError::Unauthorized(format!("HTTP {status} for {url}")));
                    }

                    if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(ApiError::NotFound(url));
                    }

                    if status.is_server_error() {
                        warn!(%url, %status, "server error, will retry");
                        last_error = Some(ApiError::Other(format!("HTTP {status} for {url}")));
                        continue;
                    }

                    if !status.is_success() {
                        return Err(ApiError::Other(format!("HTTP {status} for {url}")));
                    }

                    return resp
                        .json::<T>()
                        .map_err(|e| ApiError::ResponseFormatChanged(format!("{url}: {e}")));
                }
                Err(e) => {
                    if e.is_connect() || e.is_timeout() {
                        debug!(%url, error = %e, "connection failed, will retry");
                        last_error = Some(ApiError::NetworkUnreachable(e.to_string()));
                        continue;
                    }
                    return Err(ApiError::NetworkUnreachable(e.to_string()));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::Other("max retries exceeded".into())))
    }
}

fn refine_not_found(err: ApiError, project_id: &str) -> ApiError {
    match err {
        ApiError::NotFound(_) => ApiError::ProjectNotFound {
            project_id: project_id.to_string(),
        },
        other => other,
    }
}

impl RecordSource for ApiClient {
    fn name(&self) -> &str {
        "site_office_api"
    }

    fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, ApiError> {
        self.get_json("/api/projects")
    }

    fn fetch_snapshot(&self, project_id: &str) -> Result<ProjectSnapshot, ApiError> {
        let materials: Vec<MaterialRecord> = self
            .get_json(&format!("/api/supervisor/materials/{project_id}"))
            .map_err(|e| refine_not_found(e, project_id))?;
        let labour: Vec<LabourRecord> = self
            .get_json(&format!("/api/supervisor/labours/{project_id}"))
            .map_err(|e| refine_not_found(e, project_id))?;

        debug!(
            project_id,
            materials = materials.len(),
            labour = labour.len(),
            "snapshot fetched"
        );

        Ok(ProjectSnapshot {
            project_id: project_id.to_string(),
            fetched_at: chrono::Utc::now(),
            materials,
            labour,
        })
    }

    fn fetch_issued_materials(&self) -> Result<Vec<IssuedMaterialRecord>, ApiError> {
        self.get_json("/api/supervisor/issued-materials")
    }

    fn fetch_remaining_materials(&self) -> Result<Vec<RemainingMaterialRecord>, ApiError> {
        self.get_json("/api/supervisor/remaining-materials")
    }
}
