//! chart-trendline: least-squares trendline overlay for chart hosts.
//!
//! The crate fits a straight line through each opted-in dataset, maps the
//! fitted endpoints into pixel space, clips them against the bottom of the
//! plot area and strokes the result on a host-supplied drawing surface.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, StaticChart, TRENDLINE_PLUGIN_ID, TrendlinePlugin};
pub use core::LineFitter;
pub use error::{TrendlineError, TrendlineResult};
pub use extensions::{ChartPlugin, PluginRegistry};
