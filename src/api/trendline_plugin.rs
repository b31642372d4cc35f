use tracing::{debug, trace, warn};

use crate::core::SampleMode;
use crate::extensions::ChartPlugin;
use crate::render::{DrawingSurface, RenderFrame};

use super::{HostChart, build_trendline_segment, resolve_trendline_style};

/// Identifier under which the trendline plugin registers with a host.
pub const TRENDLINE_PLUGIN_ID: &str = "trendline-linear";

/// Draws a least-squares trendline under every visible dataset that carries
/// a `trendline` config.
///
/// The plugin keeps no state between redraws: every pass refits every
/// dataset from scratch.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrendlinePlugin;

impl TrendlinePlugin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Builds the trendline primitives for the current state of `chart`.
    ///
    /// Datasets that are hidden, empty, bound to an unknown y axis or whose fit
    /// is degenerate contribute no line.
    #[must_use]
    pub fn build_frame(&self, chart: &dyn HostChart) -> RenderFrame {
        let mut frame = RenderFrame::new(chart.viewport());
        let bounds = chart.clip_bounds();
        let x_axis_kind = chart.x_axis_kind();

        for (index, dataset) in chart.datasets().iter().enumerate() {
            let Some(config) = dataset.trendline.as_ref() else {
                continue;
            };
            if !chart.is_dataset_visible(index) || dataset.data.is_empty() {
                continue;
            }
            let Some(y_scale) = chart.y_scale(dataset.y_axis_id.as_deref()) else {
                warn!(
                    dataset = index,
                    y_axis_id = ?dataset.y_axis_id,
                    "skipping trendline: unknown y axis"
                );
                continue;
            };

            let mode = SampleMode::resolve(x_axis_kind, &dataset.data);
            let rendered_endpoints = if mode.uses_rendered_endpoints() {
                let last = dataset.data.len() - 1;
                match (
                    chart.rendered_point_x(index, 0),
                    chart.rendered_point_x(index, last),
                ) {
                    (Some(first_x), Some(last_x)) => Some((first_x, last_x)),
                    _ => {
                        debug!(dataset = index, "skipping trendline: no rendered points");
                        continue;
                    }
                }
            } else {
                None
            };

            let built = build_trendline_segment(
                &dataset.data,
                mode,
                chart.x_scale(),
                y_scale,
                rendered_endpoints,
                bounds,
            );
            trace!(
                dataset = index,
                mode = mode.as_str(),
                count = built.fitter.count(),
                clip = ?built.clip,
                "fitted trendline"
            );
            if !built.is_drawable() {
                debug!(
                    dataset = index,
                    count = built.fitter.count(),
                    "skipping trendline: degenerate fit"
                );
                continue;
            }

            let style = resolve_trendline_style(config, dataset.border_color, dataset.border_width);
            frame.push_line(style.line_primitive(built.segment));
        }

        frame
    }
}

impl ChartPlugin for TrendlinePlugin {
    fn id(&self) -> &str {
        TRENDLINE_PLUGIN_ID
    }

    fn before_datasets_draw(&mut self, chart: &dyn HostChart, surface: &mut dyn DrawingSurface) {
        let frame = self.build_frame(chart);
        for line in &frame.lines {
            if let Err(err) = surface.stroke_line(line) {
                warn!(error = %err, "failed to stroke trendline");
            }
        }
        surface.set_line_dash(&[]);
    }
}
