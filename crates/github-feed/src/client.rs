use std::time::Duration;
use tracing::debug;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Media type requested from the listing endpoint
const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Anonymous GitHub REST API client
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn user_agent() -> String {
        format!("folio/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
        username: &str,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        if status == 404 {
            return Err(GitHubError::UserNotFound(username.to_string()));
        }

        // Try to read error body
        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Try to parse as GitHub error response
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        Err(GitHubError::Api { status, message })
    }

    // ==================== Repository Operations ====================

    /// List public repositories of `username`
    ///
    /// Single request, first page only, no authentication.
    pub fn list_user_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = format!(
            "{}/users/{}/repos",
            self.base_url,
            urlencoding::encode(username)
        );
        debug!(%url, "GET");

        let response = self
            .agent
            .get(&url)
            .header("Accept", ACCEPT_V3)
            .header("User-Agent", &Self::user_agent())
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response, username)?;
        let body = response.body_mut().read_to_string()?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;
        Ok(repos)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}
