use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{
    AxisKind, ChartArea, ClipBounds, LinearScale, ValueToPixel, Viewport, parse_epoch_millis,
    parse_float,
};
use crate::error::{TrendlineError, TrendlineResult};
use crate::render::Color;

use super::{HostChart, TrendlineConfig};

/// Axis id used when a dataset does not name its vertical axis.
pub const DEFAULT_Y_AXIS_ID: &str = "y";

/// Data range and type of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub kind: AxisKind,
    pub min: f64,
    pub max: f64,
}

impl AxisConfig {
    #[must_use]
    pub fn new(kind: AxisKind, min: f64, max: f64) -> Self {
        Self { kind, min, max }
    }

    #[must_use]
    pub fn linear(min: f64, max: f64) -> Self {
        Self::new(AxisKind::Linear, min, max)
    }
}

/// One dataset as supplied by the host.
///
/// `data` holds raw entries: bare numbers, `{x, y}` objects, `{t, y}` objects
/// on time axes, or `null` gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default, alias = "trendlineLinear")]
    pub trendline: Option<TrendlineConfig>,
    #[serde(default)]
    pub border_color: Option<Color>,
    #[serde(default)]
    pub border_width: Option<f64>,
    #[serde(default, alias = "yAxisID")]
    pub y_axis_id: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

impl DatasetConfig {
    #[must_use]
    pub fn new(data: Vec<Value>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_trendline(mut self, trendline: TrendlineConfig) -> Self {
        self.trendline = Some(trendline);
        self
    }

    #[must_use]
    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = Some(color);
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_y_axis_id(mut self, axis_id: impl Into<String>) -> Self {
        self.y_axis_id = Some(axis_id.into());
        self
    }

    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Serializable description of a chart: canvas, plot area, axes and datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub chart_area: ChartArea,
    pub x_axis: AxisConfig,
    #[serde(default = "default_y_axes")]
    pub y_axes: IndexMap<String, AxisConfig>,
    #[serde(default)]
    pub datasets: Vec<DatasetConfig>,
}

fn default_y_axes() -> IndexMap<String, AxisConfig> {
    let mut axes = IndexMap::new();
    axes.insert(DEFAULT_Y_AXIS_ID.to_owned(), AxisConfig::linear(0.0, 1.0));
    axes
}

impl ChartConfig {
    /// Creates a config with a single default y axis spanning `0..1`.
    #[must_use]
    pub fn new(viewport: Viewport, chart_area: ChartArea, x_axis: AxisConfig) -> Self {
        Self {
            viewport,
            chart_area,
            x_axis,
            y_axes: default_y_axes(),
            datasets: Vec::new(),
        }
    }

    /// Sets the range of the default y axis.
    #[must_use]
    pub fn with_y_range(self, min: f64, max: f64) -> Self {
        self.with_y_axis(DEFAULT_Y_AXIS_ID, AxisConfig::linear(min, max))
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis_id: impl Into<String>, axis: AxisConfig) -> Self {
        self.y_axes.insert(axis_id.into(), axis);
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: DatasetConfig) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn from_json_str(input: &str) -> TrendlineResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            TrendlineError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> TrendlineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TrendlineError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn validate(&self) -> TrendlineResult<()> {
        self.viewport.validate()?;
        self.chart_area.validate()?;
        if self.y_axes.is_empty() {
            return Err(TrendlineError::InvalidConfig(
                "at least one y axis is required".to_owned(),
            ));
        }
        Ok(())
    }
}

/// [`HostChart`] backed by a static [`ChartConfig`].
///
/// Axes map linearly onto the chart area: x from left to right, y from bottom
/// to top. Rendered point positions are derived the way a host lays out
/// points: bare entries sit at their index, objects at their own x.
#[derive(Debug, Clone)]
pub struct StaticChart {
    config: ChartConfig,
    x_scale: LinearScale,
    y_scales: IndexMap<String, LinearScale>,
}

impl StaticChart {
    pub fn new(config: ChartConfig) -> TrendlineResult<Self> {
        config.validate()?;
        let area = config.chart_area;
        let x_scale =
            LinearScale::new(config.x_axis.min, config.x_axis.max, area.left, area.right)?;

        let mut y_scales = IndexMap::with_capacity(config.y_axes.len());
        for (axis_id, axis) in &config.y_axes {
            let scale = LinearScale::new(axis.min, axis.max, area.bottom, area.top)
                .map_err(|e| TrendlineError::InvalidConfig(format!("y axis `{axis_id}`: {e}")))?;
            y_scales.insert(axis_id.clone(), scale);
        }

        debug!(
            datasets = config.datasets.len(),
            y_axes = y_scales.len(),
            "static chart ready"
        );
        Ok(Self {
            config,
            x_scale,
            y_scales,
        })
    }

    pub fn from_json_str(input: &str) -> TrendlineResult<Self> {
        Self::new(ChartConfig::from_json_str(input)?)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}

impl HostChart for StaticChart {
    fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    fn clip_bounds(&self) -> ClipBounds {
        ClipBounds::new(
            self.config.chart_area.bottom,
            f64::from(self.config.viewport.width),
        )
    }

    fn x_axis_kind(&self) -> AxisKind {
        self.config.x_axis.kind
    }

    fn x_scale(&self) -> &dyn ValueToPixel {
        &self.x_scale
    }

    fn y_scale(&self, axis_id: Option<&str>) -> Option<&dyn ValueToPixel> {
        let scale = match axis_id {
            Some(axis_id) => self.y_scales.get(axis_id),
            None => self
                .y_scales
                .get(DEFAULT_Y_AXIS_ID)
                .or_else(|| self.y_scales.values().next()),
        };
        scale.map(|scale| scale as &dyn ValueToPixel)
    }

    fn datasets(&self) -> &[DatasetConfig] {
        &self.config.datasets
    }

    fn is_dataset_visible(&self, dataset_index: usize) -> bool {
        self.config
            .datasets
            .get(dataset_index)
            .is_some_and(|dataset| !dataset.hidden)
    }

    fn rendered_point_x(&self, dataset_index: usize, point_index: usize) -> Option<f64> {
        let dataset = self.config.datasets.get(dataset_index)?;
        let entry = dataset.data.get(point_index)?;
        let value = match entry {
            Value::Object(_) if self.config.x_axis.kind == AxisKind::Time => entry
                .get("x")
                .filter(|value| !value.is_null())
                .or_else(|| entry.get("t"))
                .map_or(f64::NAN, parse_epoch_millis),
            Value::Object(_) => entry.get("x").map_or(f64::NAN, parse_float),
            _ => point_index as f64,
        };
        Some(self.x_scale.domain_to_pixel(value))
    }
}
