use super::markup::{web_url, Escaped, Fragment, Section};
use crate::dates::{format_date_with, relative_time};
use crate::settings::WidgetSettings;
use crate::types::RepositorySummary;
use chrono::{DateTime, FixedOffset, Utc};
use std::fmt::Write;

const GITHUB_URL: &str = "https://github.com/";
const GITHUB_LOGO_URL: &str = "https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png";

/// Renders the header, description, ownership, stats and activity blocks.
///
/// The activity block carries an empty `.sparkline` element that the commit
/// histogram is drawn into once the commit list arrives.
pub fn render_summary(
    summary: &RepositorySummary,
    settings: &WidgetSettings,
    now: &DateTime<FixedOffset>,
) -> Fragment {
    let mut html = String::new();

    // Writing into a String cannot fail
    let _ = write_summary(&mut html, summary, settings, now);

    Fragment::new(Section::Repository, html)
}

fn write_summary<W: Write>(
    w: &mut W,
    summary: &RepositorySummary,
    settings: &WidgetSettings,
    now: &DateTime<FixedOffset>,
) -> std::fmt::Result {
    writeln!(w, "<div class=\"repository\">")?;
    writeln!(
        w,
        "<div class=\"title\"><a class=\"site-logo\" href=\"{GITHUB_URL}\"><img alt=\"GitHub\" class=\"github-logo\" height=\"30\" src=\"{GITHUB_LOGO_URL}\"></a><span> / {}</span></div>",
        Escaped(&summary.name)
    )?;

    write!(w, "<div class=\"summary\">")?;
    if let Some(description) = summary.description.as_deref().filter(|d| !d.is_empty()) {
        write!(w, "<p class=\"description\">{}</p>", Escaped(description))?;
    }
    if let Some(homepage) = summary.homepage.as_deref().filter(|h| !h.is_empty()) {
        match web_url(homepage) {
            Some(href) => write!(
                w,
                "<a class=\"homepage\" href=\"{}\">{}</a>",
                Escaped(href),
                Escaped(homepage)
            )?,
            None => write!(w, "<span class=\"homepage\">{}</span>", Escaped(homepage))?,
        }
    }
    writeln!(w, "</div>")?;

    let owner = &summary.owner;
    write!(w, "<div class=\"stats\"><div class=\"ownership\">")?;
    if let Some(avatar) = web_url(&owner.avatar_url) {
        write!(w, "<img class=\"gravatar\" src=\"{}\" />", Escaped(avatar))?;
    }
    writeln!(
        w,
        "<a class=\"link-user\" href=\"{}\">{}</a></div>",
        Escaped(&owner.profile_url()),
        Escaped(&owner.login)
    )?;
    writeln!(w, "<div class=\"repostats\"><ul class=\"repo-stats\">")?;
    writeln!(
        w,
        "<li class=\"watchers\"><a href=\"{}\" title=\"Watchers\"><span class=\"icon\"></span>{}</a></li>",
        Escaped(&summary.watchers_url()),
        summary.watcher_count
    )?;
    writeln!(
        w,
        "<li class=\"forks\"><a href=\"{}\" title=\"Forks\"><span class=\"icon\"></span>{}</a></li>",
        Escaped(&summary.network_url()),
        summary.fork_count
    )?;
    writeln!(w, "</ul></div></div>")?;

    writeln!(w, "<div class=\"activity\">")?;
    writeln!(
        w,
        "<p class=\"history\"><span class=\"emphasis\">Commit history</span><span class=\"sparkline\"></span></p>"
    )?;
    write_activity_line(w, "updated", "Updated", &summary.pushed_at, settings, now)?;
    write_activity_line(w, "created", "Created", &summary.created_at, settings, now)?;
    writeln!(w, "</div>")?;
    write!(w, "</div>")
}

fn write_activity_line<W: Write>(
    w: &mut W,
    class: &str,
    label: &str,
    at: &DateTime<Utc>,
    settings: &WidgetSettings,
    now: &DateTime<FixedOffset>,
) -> std::fmt::Result {
    let at = settings.zone.localize(at);
    let ago = relative_time(&at, now);

    write!(w, "<p class=\"{class}\"><span class=\"emphasis\">{label}</span> ")?;
    if settings.show_dates {
        write!(
            w,
            "{} <span class=\"time-ago\">({})</span>",
            format_date_with(&at, settings.month_index),
            ago
        )?;
    } else {
        write!(w, "{ago}")?;
    }
    writeln!(w, "</p>")
}
