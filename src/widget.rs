use crate::error::Result;
use crate::github::GitHubClient;
use crate::histogram::CommitHistogram;
use crate::render::{
    render_commits, render_sparkline_call, render_summary, Container, Fragment, Section,
    SparklineOptions,
};
use crate::settings::WidgetSettings;
use crate::types::{CommitRecord, RepositorySummary};
use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, info, warn};

/// A repository info card bound to one container
pub struct Widget {
    container: Container,
    settings: WidgetSettings,
    client: GitHubClient,
    sparkline: SparklineOptions,
}

/// What one activation fetched, and which sections ended up degraded
#[derive(Debug)]
pub struct WidgetReport {
    pub repository: Result<RepositorySummary>,
    pub commits: Result<Vec<CommitRecord>>,
    /// Present whenever the commit list was fetched, even if it was empty
    pub histogram: Option<CommitHistogram>,
    pub rendered_at: DateTime<FixedOffset>,
}

impl WidgetReport {
    pub fn is_complete(&self) -> bool {
        self.repository.is_ok() && self.commits.is_ok()
    }

    pub fn degraded_sections(&self) -> Vec<Section> {
        let mut sections = Vec::new();
        if self.repository.is_err() {
            sections.push(Section::Repository);
        }
        if self.commits.is_err() {
            sections.push(Section::CommitList);
        }
        sections
    }
}

impl Widget {
    pub fn new(container: Container, settings: WidgetSettings, client: GitHubClient) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            container,
            settings,
            client,
            sparkline: SparklineOptions::default(),
        })
    }

    pub fn with_sparkline_options(mut self, options: SparklineOptions) -> Self {
        self.sparkline = options;
        self
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn into_container(self) -> Container {
        self.container
    }

    /// Fetches and renders both sections as of the current time
    pub async fn activate(&mut self) -> WidgetReport {
        self.activate_at(Utc::now()).await
    }

    /// Fetches repository metadata and the commit list concurrently and
    /// renders each into the container as soon as both have settled.
    ///
    /// A failed fetch renders a degraded placeholder for its own section and
    /// never affects the other one.
    pub async fn activate_at(&mut self, now: DateTime<Utc>) -> WidgetReport {
        let now = self.settings.zone.localize(&now);
        let (username, repository) = (&self.settings.username, &self.settings.repository);

        debug!(repo = %self.settings.full_name(), "Requesting repository metadata and commits");

        let (repo_result, commits_result) = tokio::join!(
            self.client.get_repository(username, repository),
            self.client.list_commits(username, repository),
        );

        let summary_fragment = match &repo_result {
            Ok(summary) => {
                info!(repo = %self.settings.full_name(), "Rendered repository summary");
                render_summary(summary, &self.settings, &now)
            }
            Err(e) => {
                warn!(repo = %self.settings.full_name(), "Repository metadata unavailable: {}", e);
                Fragment::unavailable(Section::Repository, e)
            }
        };
        self.container.append(summary_fragment);

        let histogram = match &commits_result {
            Ok(records) => {
                let histogram = self.build_histogram(records, &now);
                info!(
                    repo = %self.settings.full_name(),
                    commits = records.len(),
                    in_window = histogram.total(),
                    "Rendered commit list"
                );

                self.container.append(render_commits(records, &self.settings, &now));
                match render_sparkline_call(self.container.id(), &histogram, &self.sparkline) {
                    Ok(fragment) => self.container.append(fragment),
                    Err(e) => {
                        warn!("Failed to serialize sparkline: {}", e);
                        self.container.append(Fragment::unavailable(Section::Sparkline, &e));
                    }
                }
                Some(histogram)
            }
            Err(e) => {
                warn!(repo = %self.settings.full_name(), "Commit list unavailable: {}", e);
                self.container.append(Fragment::unavailable(Section::CommitList, e));
                None
            }
        };

        WidgetReport {
            repository: repo_result,
            commits: commits_result,
            histogram,
            rendered_at: now,
        }
    }

    fn build_histogram(&self, records: &[CommitRecord], now: &DateTime<FixedOffset>) -> CommitHistogram {
        let zone = self.settings.zone;
        CommitHistogram::build(
            records.iter().map(|r| zone.localize(&r.committed_at())),
            self.settings.timespan_days,
            now,
        )
    }
}
