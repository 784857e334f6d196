mod cli;

use clap::Parser;
use cli::{Cli, OutputFormat};
use colored::*;
use github_info_widget::render::render_text;
use github_info_widget::{Container, GitHubClient, Widget};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout only carries the widget
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.widget_settings();

    eprintln!("{} {}", "Fetching".bold().green(), settings.full_name());

    let client = GitHubClient::new(cli.client_config())?;
    let container = Container::new(cli.container_id.clone())?;
    let mut widget = Widget::new(container, settings, client)?;

    let report = widget.activate().await;

    let output = match cli.format {
        OutputFormat::Html => widget.container().to_html(),
        OutputFormat::Text => render_text(&report, widget.settings()),
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            eprintln!("✅ Wrote widget to {}", path.display());
        }
        None => print!("{}", output),
    }

    for section in report.degraded_sections() {
        eprintln!("{}", format!("⚠️ The {} section could not be loaded", section).yellow());
    }

    Ok(())
}
