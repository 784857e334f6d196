pub mod dates;
pub mod error;
pub mod github;
pub mod histogram;
pub mod render;
pub mod settings;
pub mod types;
pub mod widget;

pub use error::{Result, WidgetError};
pub use github::{ClientConfig, GitHubClient};
pub use histogram::CommitHistogram;
pub use render::Container;
pub use settings::WidgetSettings;
pub use widget::{Widget, WidgetReport};
