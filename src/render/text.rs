use super::sparkline::unicode_sparkline;
use crate::dates::{format_date_with, relative_time};
use crate::settings::WidgetSettings;
use crate::widget::WidgetReport;
use colored::*;
use std::fmt::Write;

/// Renders a report as a colored terminal card
pub fn render_text(report: &WidgetReport, settings: &WidgetSettings) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_text(&mut out, report, settings);
    out
}

fn write_text<W: Write>(w: &mut W, report: &WidgetReport, settings: &WidgetSettings) -> std::fmt::Result {
    let now = &report.rendered_at;

    match &report.repository {
        Ok(summary) => {
            writeln!(w, "{} / {}", "GitHub".bold(), summary.name.bold().green())?;
            if let Some(description) = summary.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(w, "{}", description)?;
            }
            if let Some(homepage) = summary.homepage.as_deref().filter(|h| !h.is_empty()) {
                writeln!(w, "{}", homepage.underline())?;
            }
            writeln!(
                w,
                "{} {}   {} {}   {} {}",
                "owner".dimmed(),
                summary.owner.login.cyan(),
                "watchers".dimmed(),
                summary.watcher_count,
                "forks".dimmed(),
                summary.fork_count
            )?;

            for (label, at) in [("Updated", &summary.pushed_at), ("Created", &summary.created_at)] {
                let at = settings.zone.localize(at);
                let ago = relative_time(&at, now);
                if settings.show_dates {
                    writeln!(w, "{} {} ({})", label.bold(), format_date_with(&at, settings.month_index), ago)?;
                } else {
                    writeln!(w, "{} {}", label.bold(), ago)?;
                }
            }
        }
        Err(e) => writeln!(w, "{} {}", "Repository details unavailable:".red(), e)?,
    }

    if let Some(histogram) = &report.histogram {
        writeln!(
            w,
            "{} [{}] {} in {} days",
            "Commit history".bold(),
            unicode_sparkline(histogram).yellow(),
            histogram.total(),
            histogram.len()
        )?;
    }

    writeln!(w)?;
    match &report.commits {
        Ok(commits) => {
            writeln!(w, "{}", "Latest Commits".bold())?;
            for record in commits {
                let authored = settings.zone.localize(&record.authored_at());
                let headline = record.message().lines().next().unwrap_or_default();
                writeln!(
                    w,
                    "  {} {} {}",
                    record.display_name().cyan(),
                    format!("({})", relative_time(&authored, now)).dimmed(),
                    headline
                )?;
            }
        }
        Err(e) => writeln!(w, "{} {}", "Latest commits unavailable:".red(), e)?,
    }
    Ok(())
}
