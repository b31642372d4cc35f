use serde_json::Value;

use crate::core::numeric::parse_float;
use crate::core::sample::Sample;

const EMPTY_MIN_X: f64 = 1e100;
const EMPTY_MAX_X: f64 = -1e100;

/// Streaming ordinary-least-squares accumulator for `y = offset + scale * x`.
///
/// Only the five running sums and the observed x range are kept, so fitting
/// a dataset is a single O(n) pass with O(1) memory. Samples can be added but
/// never removed.
///
/// Offset and scale are derived from the sums on every call. When fewer than
/// two samples were added, or every sample shares the same x, the normal
/// equations have no unique solution and `evaluate` returns NaN or infinity;
/// callers decide whether to draw such a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFitter {
    count: usize,
    sum_x: f64,
    sum_x2: f64,
    sum_xy: f64,
    sum_y: f64,
    min_x: f64,
    max_x: f64,
}

impl Default for LineFitter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFitter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            sum_x: 0.0,
            sum_x2: 0.0,
            sum_xy: 0.0,
            sum_y: 0.0,
            min_x: EMPTY_MIN_X,
            max_x: EMPTY_MAX_X,
        }
    }

    /// Accumulates one sample. Non-finite input poisons the sums instead of failing.
    pub fn add(&mut self, x: f64, y: f64) {
        self.count += 1;
        self.sum_x += x;
        self.sum_x2 += x * x;
        self.sum_xy += x * y;
        self.sum_y += y;
        if x < self.min_x {
            self.min_x = x;
        }
        if x > self.max_x {
            self.max_x = x;
        }
    }

    /// Accumulates one sample from loosely typed values.
    ///
    /// Values are coerced with [`parse_float`]; anything non-numeric becomes NaN.
    pub fn add_value(&mut self, x: &Value, y: &Value) {
        self.add(parse_float(x), parse_float(y));
    }

    pub fn add_sample(&mut self, sample: Sample) {
        self.add(sample.x, sample.y);
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `n * Σx² - (Σx)²`; zero means the fit is not unique.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let n = self.count as f64;
        n * self.sum_x2 - self.sum_x * self.sum_x
    }

    /// True when the sums admit no usable fit: fewer than two samples, a
    /// single distinct x, non-finite input, or a determinant lost in the
    /// rounding error of the sums it is built from.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        if self.count < 2 || self.min_x == self.max_x {
            return true;
        }
        let n = self.count as f64;
        let det = self.determinant();
        !det.is_finite() || det.abs() <= n * n * self.sum_x2 * f64::EPSILON
    }

    /// Intercept of the fitted line.
    #[must_use]
    pub fn offset(&self) -> f64 {
        (self.sum_x2 * self.sum_y - self.sum_x * self.sum_xy) / self.determinant()
    }

    /// Slope of the fitted line.
    #[must_use]
    pub fn scale(&self) -> f64 {
        let n = self.count as f64;
        (n * self.sum_xy - self.sum_x * self.sum_y) / self.determinant()
    }

    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.offset() + x * self.scale()
    }
}

impl Extend<Sample> for LineFitter {
    fn extend<T: IntoIterator<Item = Sample>>(&mut self, iter: T) {
        for sample in iter {
            self.add_sample(sample);
        }
    }
}

impl FromIterator<Sample> for LineFitter {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        let mut fitter = Self::new();
        fitter.extend(iter);
        fitter
    }
}
