//! Host-facing plugin hooks.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginRegistry};
