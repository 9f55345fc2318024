// GitHub API HTTP client.
// Handles authentication, rate limiting, and request/response processing.

use std::sync::Mutex;
use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{DashError, Result};

use super::types::RateLimit;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub API client with optional authentication and rate limit tracking.
pub struct GitHubClient {
    client: Client,
    authenticated: bool,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a new GitHub client. Requests are authenticated when a token is
    /// given; without one GitHub applies the much lower anonymous rate limit.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("octodash"));

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| DashError::Other(e.to_string()))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(DashError::Api)?;

        Ok(Self {
            client,
            authenticated: token.is_some(),
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Get the most recently observed rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
            .lock()
            .map(|limit| limit.clone())
            .unwrap_or_default()
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self.client.get(&url).send().await.map_err(DashError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(DashError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let Ok(mut rate_limit) = self.rate_limit.lock() else {
            return;
        };

        if let Some(limit) = header_value(response, "x-ratelimit-limit") {
            rate_limit.limit = limit;
        }

        if let Some(remaining) = header_value(response, "x-ratelimit-remaining") {
            rate_limit.remaining = remaining;
        }

        if let Some(reset) = header_value(response, "x-ratelimit-reset") {
            rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
            StatusCode::UNAUTHORIZED => Err(DashError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(DashError::NotFound(url))
            }
            StatusCode::FORBIDDEN => {
                let rate_limit = self.rate_limit();
                if rate_limit.remaining == 0 {
                    let reset_at = chrono::DateTime::from_timestamp(rate_limit.reset as i64, 0)
                        .map(|dt| dt.format("%H:%M:%S UTC").to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    Err(DashError::RateLimited {
                        reset_at,
                        authenticated: self.authenticated,
                    })
                } else {
                    Err(DashError::Other(format!(
                        "Forbidden: {}",
                        response.text().await.unwrap_or_default()
                    )))
                }
            }
            status => Err(DashError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}

fn header_value(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
