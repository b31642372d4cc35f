//! Host integration: chart description, style resolution and the trendline plugin.

mod chart_config;
mod host;
mod trendline_plugin;
mod trendline_segment_builder;
mod trendline_style_resolver;

pub use chart_config::{AxisConfig, ChartConfig, DEFAULT_Y_AXIS_ID, DatasetConfig, StaticChart};
pub use host::HostChart;
pub use trendline_plugin::{TRENDLINE_PLUGIN_ID, TrendlinePlugin};
pub use trendline_segment_builder::{
    TrendlineSegment, build_trendline_segment, fit_dataset, project_trendline_segment,
};
pub use trendline_style_resolver::{
    DEFAULT_TRENDLINE_WIDTH_PX, TrendlineConfig, TrendlineStyle, default_trendline_color,
    resolve_trendline_style,
};
