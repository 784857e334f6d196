pub mod commits;
pub mod markup;
pub mod sparkline;
pub mod summary;
pub mod text;

pub use commits::render_commits;
pub use markup::{html_escape, Container, Escaped, Fragment, Section};
pub use sparkline::{render_sparkline_call, unicode_sparkline, ChartType, SparklineOptions};
pub use summary::render_summary;
pub use text::render_text;
