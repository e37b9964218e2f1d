use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{OpenShiftRequest, OpenShiftResponse, ShiftStatus};

/// Backend used when `REGISTER_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Base URL baked in at build time, falling back to the local backend
pub fn configured_base_url() -> String {
    option_env!("REGISTER_API_BASE_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// API client for the register backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self {
            base_url: configured_base_url(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch whether a shift is currently open on the register
    pub async fn get_shift_status(&self) -> Result<ShiftStatus, String> {
        let url = self.endpoint("/api/shift/status");

        match Request::get(&url).send().await {
            Ok(response) => Self::parse_response(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Open a new shift with the given opening amount
    pub async fn open_shift(&self, request: OpenShiftRequest) -> Result<OpenShiftResponse, String> {
        let url = self.endpoint("/api/shift/open");

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Self::parse_response(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            if error_text.trim().is_empty() {
                Err(format!("Server error {}", status))
            } else {
                Err(error_text)
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
