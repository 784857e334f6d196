use clap::{Parser, ValueEnum};
use github_info_widget::dates::MonthIndex;
use github_info_widget::github::{ClientConfig, DEFAULT_API_URL};
use github_info_widget::settings::{DayZone, DEFAULT_REPOSITORY, DEFAULT_USERNAME, MAX_TIMESPAN_DAYS};
use github_info_widget::WidgetSettings;
use chrono::{Offset, Utc};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML snippet with the sparkline script call
    Html,
    /// Colored terminal card
    Text,
}

#[derive(Parser)]
#[command(name = "github-info-widget")]
#[command(about = "Renders a GitHub repository info card with a commit history sparkline")]
#[command(version)]
pub struct Cli {
    /// Repository owner
    #[arg(long, short = 'u', env = "GITHUB_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Repository name
    #[arg(long, short = 'r', env = "GITHUB_REPOSITORY", default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// Days covered by the commit history sparkline
    #[arg(long, short = 't', env = "WIDGET_TIMESPAN", default_value_t = 30,
          value_parser = clap::value_parser!(u32).range(1..=MAX_TIMESPAN_DAYS as i64))]
    pub timespan: u32,

    /// Show absolute dates next to relative ones
    #[arg(long)]
    pub show_dates: bool,

    /// Use small committer avatars
    #[arg(long)]
    pub tiny_avatars: bool,

    /// Print months zero-based (January = 00) like the legacy widget
    #[arg(long)]
    pub zero_based_month: bool,

    /// Bucket commits by UTC days instead of the local time zone
    #[arg(long)]
    pub utc: bool,

    /// GitHub token, raises the anonymous rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Retries after a server error
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Id of the container element
    #[arg(long, default_value = "github-info")]
    pub container_id: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn widget_settings(&self) -> WidgetSettings {
        let month_index = if self.zero_based_month {
            MonthIndex::ZeroBased
        } else {
            MonthIndex::OneBased
        };

        WidgetSettings::new(&self.username, &self.repository)
            .with_timespan(self.timespan as usize)
            .with_show_dates(self.show_dates)
            .with_tiny_avatars(self.tiny_avatars)
            .with_month_index(month_index)
            .with_zone(self.zone())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout),
            max_retries: self.retries,
        }
    }

    fn zone(&self) -> DayZone {
        if self.utc {
            DayZone::Fixed(Utc.fix())
        } else {
            DayZone::Local
        }
    }
}
