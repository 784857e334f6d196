use super::markup::{Fragment, Section};
use crate::error::Result;
use crate::histogram::CommitHistogram;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
}

/// Style passed to the sparkline plugin alongside the values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparklineOptions {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub bar_color: String,
    pub bar_width: u32,
}

impl Default for SparklineOptions {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Bar,
            bar_color: "grey".to_string(),
            bar_width: 2,
        }
    }
}

/// Emits the script that hands the histogram to the page's sparkline plugin.
///
/// The selector is scoped to the container so several widgets can share a page.
pub fn render_sparkline_call(
    container_id: &str,
    histogram: &CommitHistogram,
    options: &SparklineOptions,
) -> Result<Fragment> {
    let values = serde_json::to_string(histogram)?;
    let options = serde_json::to_string(options)?;
    let html = format!(
        "<script>jQuery('#{container_id} .sparkline').sparkline({values}, {options});</script>"
    );
    Ok(Fragment::new(Section::Sparkline, html))
}

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Unicode block sparkline for terminal output; empty days print as spaces
pub fn unicode_sparkline(histogram: &CommitHistogram) -> String {
    let peak = histogram.peak();
    histogram
        .buckets()
        .iter()
        .map(|&count| {
            if count == 0 || peak == 0 {
                ' '
            } else {
                let level = (count as usize * BARS.len()).div_ceil(peak as usize);
                BARS[level.clamp(1, BARS.len()) - 1]
            }
        })
        .collect()
}
