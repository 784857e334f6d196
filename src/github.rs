use crate::error::{Result, WidgetError};
use crate::types::{CommitRecord, RateLimitState, RepositorySummary};
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("github-info-widget/", env!("CARGO_PKG_VERSION"));
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Connection settings for [`GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    /// Extra attempts after a 5xx response
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            max_retries: 0,
        }
    }
}

pub struct GitHubClient {
    client: Client,
    api_url: Url,
    token: Option<String>,
    max_retries: u32,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(WidgetError::InvalidSettings(format!(
                "API URL cannot be used as a base: {}",
                config.api_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            api_url,
            token: config.token.filter(|t| !t.is_empty()),
            max_retries: config.max_retries,
        })
    }

    /// Client for the public API without a token
    pub fn anonymous() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Builds `{api_url}/repos/{owner}/{repo}[/{tail}..]`, escaping each segment
    pub fn repo_url(&self, owner: &str, repo: &str, tail: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| WidgetError::InvalidSettings(format!("API URL cannot be used as a base: {}", self.api_url)))?
            .pop_if_empty()
            .push("repos")
            .push(owner)
            .push(repo)
            .extend(tail);
        Ok(url)
    }

    async fn make_request(&self, url: &Url) -> Result<Response> {
        let mut retries = 0;

        loop {
            debug!(%url, "GET");
            let mut request = self
                .client
                .get(url.clone())
                .header("Accept", "application/vnd.github.v3+json");
            if let Some(token) = &self.token {
                request = request.header("Authorization", format!("token {}", token));
            }
            let response = request.send().await?;

            match response.status() {
                reqwest::StatusCode::OK => {
                    let rate_limit = self.get_rate_limit_state(&response);
                    debug!(
                        remaining = rate_limit.remaining,
                        limit = rate_limit.limit,
                        "GitHub rate limit"
                    );
                    return Ok(response);
                }
                reqwest::StatusCode::NOT_FOUND => {
                    return Err(WidgetError::NotFound(format!("Resource not found: {}", url)));
                }
                reqwest::StatusCode::FORBIDDEN | reqwest::StatusCode::TOO_MANY_REQUESTS
                    if header_value::<u32>(&response, "X-RateLimit-Remaining") == Some(0) =>
                {
                    let rate_limit = self.get_rate_limit_state(&response);
                    return Err(WidgetError::RateLimitExceeded(format!(
                        "API rate limit exceeded. Reset at: {}",
                        rate_limit.reset_time
                    )));
                }
                status if status.is_server_error() && retries < self.max_retries => {
                    warn!("Server error ({}). Retrying in {} seconds...", status, RETRY_DELAY.as_secs());
                    sleep(RETRY_DELAY).await;
                    retries += 1;
                    continue;
                }
                status => {
                    let error_text = response.text().await.unwrap_or_default();
                    return Err(WidgetError::ApiError(format!(
                        "API request failed with status {}: {}",
                        status, error_text
                    )));
                }
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let response = self.make_request(url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /repos/{owner}/{repo}`
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositorySummary> {
        let url = self.repo_url(owner, repo, &[])?;
        self.get_json(&url).await
    }

    /// `GET /repos/{owner}/{repo}/commits`, newest first as delivered
    pub async fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<CommitRecord>> {
        let url = self.repo_url(owner, repo, &["commits"])?;
        self.get_json(&url).await
    }

    /// Rate limit state carried by a response's headers
    pub fn get_rate_limit_state(&self, response: &Response) -> RateLimitState {
        let remaining = header_value::<u32>(response, "X-RateLimit-Remaining").unwrap_or(0);
        let limit = header_value::<u32>(response, "X-RateLimit-Limit").unwrap_or(60);
        let reset = header_value::<i64>(response, "X-RateLimit-Reset")
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
            .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

        RateLimitState {
            remaining,
            limit,
            reset_time: reset,
            is_limited: remaining == 0,
        }
    }
}

fn header_value<T: std::str::FromStr>(response: &Response, name: &str) -> Option<T> {
    response
        .headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<T>().ok())
}
