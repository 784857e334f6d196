use crate::error::{Result, WidgetError};
use std::fmt;
use url::Url;

/// Escapes text for use in HTML element content and quoted attributes
pub fn html_escape(s: &str) -> String {
    Escaped(s).to_string()
}

/// Display adapter that escapes its contents as it is written
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// Returns `url` if it is an absolute `http` or `https` URL, the only
/// schemes server-provided links and image sources are rendered with
pub fn web_url(url: &str) -> Option<&str> {
    let parsed = Url::parse(url).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(url)
}

/// Escapes a commit message and turns each run of two or more newlines into
/// a single `<br/>`. Lone newlines stay as text.
pub fn commit_message_html(message: &str) -> String {
    let escaped = html_escape(message);
    let mut html = String::with_capacity(escaped.len());
    let mut newlines = 0usize;

    for c in escaped.chars() {
        if c == '\n' {
            newlines += 1;
            continue;
        }
        flush_newlines(&mut html, newlines);
        newlines = 0;
        html.push(c);
    }
    flush_newlines(&mut html, newlines);
    html
}

fn flush_newlines(html: &mut String, count: usize) {
    match count {
        0 => {}
        1 => html.push('\n'),
        _ => html.push_str("<br/>"),
    }
}

/// Regions of the widget, in the order they are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Repository,
    CommitList,
    Sparkline,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Repository => "repository",
            Section::CommitList => "commit list",
            Section::Sparkline => "sparkline",
        };
        f.write_str(name)
    }
}

/// A rendered piece of markup destined for one section of the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub section: Section,
    pub html: String,
    pub degraded: bool,
}

impl Fragment {
    pub fn new(section: Section, html: String) -> Self {
        Self { section, html, degraded: false }
    }

    /// Placeholder shown when the data for `section` could not be loaded
    pub fn unavailable(section: Section, error: &WidgetError) -> Self {
        let (class, label) = match section {
            Section::Repository => ("repository", "Repository details"),
            Section::CommitList => ("latest-commits", "Latest commits"),
            Section::Sparkline => ("history", "Commit history"),
        };
        let html = format!(
            "<div class=\"{class} unavailable\"><p class=\"error\">{label} unavailable: {}</p></div>",
            Escaped(&error.to_string())
        );
        Self { section, html, degraded: true }
    }

    fn is_script(&self) -> bool {
        self.section == Section::Sparkline && !self.degraded
    }
}

/// The element a widget renders into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    fragments: Vec<Fragment>,
}

impl Container {
    /// `id` becomes the element id and the scope of the sparkline selector,
    /// so it is limited to ASCII letters, digits, `-` and `_`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let valid = !id.is_empty()
            && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(WidgetError::InvalidSettings(format!("invalid container id: {:?}", id)));
        }
        Ok(Self { id, fragments: Vec::new() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn append(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Fragments in the order they were appended
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn section(&self, section: Section) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.section == section)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Lays the fragments out in section order, independent of arrival order.
    /// Scripts go after the wrapper element so their selectors resolve.
    pub fn to_html(&self) -> String {
        let mut ordered: Vec<&Fragment> = self.fragments.iter().collect();
        ordered.sort_by_key(|f| f.section);

        let mut html = format!("<div class=\"github-info\" id=\"{}\">\n", self.id);
        for fragment in ordered.iter().filter(|f| !f.is_script()) {
            html.push_str(&fragment.html);
            html.push('\n');
        }
        html.push_str("</div>\n");
        for fragment in ordered.iter().filter(|f| f.is_script()) {
            html.push_str(&fragment.html);
            html.push('\n');
        }
        html
    }
}
