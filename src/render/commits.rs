use super::markup::{commit_message_html, web_url, Escaped, Fragment, Section};
use crate::dates::relative_time;
use crate::settings::WidgetSettings;
use crate::types::CommitRecord;
use chrono::{DateTime, FixedOffset};
use std::fmt::Write;

/// Renders the scrollable "Latest Commits" list, newest first
pub fn render_commits(
    commits: &[CommitRecord],
    settings: &WidgetSettings,
    now: &DateTime<FixedOffset>,
) -> Fragment {
    let mut html = String::new();

    // Writing into a String cannot fail
    let _ = write_commits(&mut html, commits, settings, now);
    Fragment::new(Section::CommitList, html)
}

/// Striping class for the entry at `position`; the first entry is `odd`
pub fn stripe_class(position: usize) -> &'static str {
    if position % 2 == 0 {
        "odd"
    } else {
        "even"
    }
}

fn write_commits<W: Write>(
    w: &mut W,
    commits: &[CommitRecord],
    settings: &WidgetSettings,
    now: &DateTime<FixedOffset>,
) -> std::fmt::Result {
    writeln!(w, "<div class=\"latest-commits\"><h4>Latest Commits</h4><div class=\"wrapper\">")?;

    let avatar_class = if settings.tiny_avatars { "gravatar tiny" } else { "gravatar" };

    for (position, record) in commits.iter().enumerate() {
        write!(
            w,
            "<div class=\"commit {}\"><div class=\"commiter-info\">",
            stripe_class(position)
        )?;

        match &record.committer {
            Some(account) => {
                if let Some(avatar) = web_url(&account.avatar_url) {
                    write!(w, "<img class=\"{avatar_class}\" src=\"{}\" />", Escaped(avatar))?;
                }
                write!(
                    w,
                    "<a class=\"link-user\" href=\"{}\">{}</a>",
                    Escaped(&account.profile_url()),
                    Escaped(&account.login)
                )?
            }
            None => write!(
                w,
                "<span class=\"link-user\">{}</span>",
                Escaped(record.display_name())
            )?,
        }

        let authored = settings.zone.localize(&record.authored_at());
        writeln!(
            w,
            " <span class=\"time-ago\">({})</span></div><p class=\"commit-msg\">{}</p></div>",
            relative_time(&authored, now),
            commit_message_html(record.message())
        )?;
    }

    write!(w, "</div></div>")
}
