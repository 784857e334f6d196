use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// GitHub API response structures

/// Snapshot of `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub owner: Account,
    #[serde(rename = "watchers")]
    pub watcher_count: u32,
    #[serde(rename = "forks")]
    pub fork_count: u32,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
}

impl RepositorySummary {
    pub fn watchers_url(&self) -> String {
        format!("{}/watchers", self.html_url)
    }

    pub fn network_url(&self) -> String {
        format!("{}/network", self.html_url)
    }
}

/// A GitHub user or organization as embedded in API payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    pub avatar_url: String,
}

impl Account {
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.login)
    }
}

/// One entry of `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub html_url: Option<String>,
    /// `null` when the committer email is not linked to a GitHub account
    pub committer: Option<Account>,
    pub commit: CommitDetail,
}

impl CommitRecord {
    /// Date used for day bucketing
    pub fn committed_at(&self) -> DateTime<Utc> {
        self.commit.committer.date
    }

    pub fn authored_at(&self) -> DateTime<Utc> {
        self.commit.author.date
    }

    pub fn message(&self) -> &str {
        &self.commit.message
    }

    /// Login of the linked account, falling back to the git committer name
    pub fn display_name(&self) -> &str {
        match &self.committer {
            Some(account) => &account.login,
            None => &self.commit.committer.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: GitSignature,
    pub committer: GitSignature,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitSignature {
    #[serde(default)]
    pub name: String,
    pub date: DateTime<Utc>,
}

/// Rate limit state read from the last API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: DateTime<Utc>,
    pub is_limited: bool,
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self {
            remaining: 60,
            limit: 60,
            reset_time: Utc::now() + chrono::Duration::hours(1),
            is_limited: false,
        }
    }
}
