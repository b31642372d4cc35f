use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::numeric::{parse_epoch_millis, parse_float};
use crate::core::scale::AxisKind;

/// One `(x, y)` pair fed to the line fitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How raw dataset entries are read as samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    /// Bare values; x is the entry position in the dataset.
    Indexed,
    /// Objects carrying explicit `x` and `y` fields.
    Paired,
    /// Objects on a time axis; `x` (or `t`) is a date read as epoch milliseconds.
    Temporal,
}

impl SampleMode {
    /// Picks the mode once for a whole dataset.
    ///
    /// A time-typed x axis always wins. Otherwise the first non-null entry
    /// decides: an object selects `Paired`, anything else `Indexed`.
    #[must_use]
    pub fn resolve(x_axis_kind: AxisKind, data: &[Value]) -> Self {
        if x_axis_kind == AxisKind::Time {
            return Self::Temporal;
        }
        match data.iter().find(|entry| !entry.is_null()) {
            Some(Value::Object(_)) => Self::Paired,
            _ => Self::Indexed,
        }
    }

    #[must_use]
    pub fn uses_rendered_endpoints(self) -> bool {
        self == Self::Indexed
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indexed => "indexed",
            Self::Paired => "paired",
            Self::Temporal => "temporal",
        }
    }
}

/// Reads one non-null entry at `index` as a sample.
#[must_use]
pub fn read_sample(entry: &Value, index: usize, mode: SampleMode) -> Sample {
    match mode {
        SampleMode::Indexed => Sample::new(index as f64, parse_float(entry)),
        SampleMode::Paired => Sample::new(field_float(entry, "x"), field_float(entry, "y")),
        SampleMode::Temporal => {
            let time = entry
                .get("x")
                .filter(|value| !value.is_null())
                .or_else(|| entry.get("t"))
                .map_or(f64::NAN, parse_epoch_millis);
            Sample::new(time, field_float(entry, "y"))
        }
    }
}

/// Lazily yields the samples of `data`, skipping `null` entries.
///
/// Skipped entries keep their slot, so indexed x values stay aligned with the
/// position of each entry in the dataset.
pub fn extract_samples(data: &[Value], mode: SampleMode) -> impl Iterator<Item = Sample> + '_ {
    data.iter()
        .enumerate()
        .filter(|(_, entry)| !entry.is_null())
        .map(move |(index, entry)| read_sample(entry, index, mode))
}

fn field_float(entry: &Value, field: &str) -> f64 {
    entry.get(field).map_or(f64::NAN, parse_float)
}
