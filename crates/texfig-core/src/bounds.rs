// File: crates/texfig-core/src/bounds.rs
// Summary: Axis limits from data extrema with relative y padding and a trailing x margin.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{FigureError, Result};

/// Fraction of the y data range added below the minimum and above the maximum.
pub const Y_PAD_FRACTION: f64 = 0.1;

/// Half a day appended after the last x value.
pub fn x_trailing_margin() -> Duration {
    Duration::hours(12)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: DateTime<Tz>,
    /// Last index value plus [`x_trailing_margin`].
    pub x_max: DateTime<Tz>,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Compute padded limits over the index and every value column.
    ///
    /// When all values are equal the padding is zero and `y_min == y_max`;
    /// that collapse is kept as-is rather than widened. NaN values are skipped
    /// by the min/max scan and do not affect the limits.
    pub fn compute<'a, I>(index: &[DateTime<Tz>], columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let x_min = index.iter().min().copied().ok_or(FigureError::EmptyData)?;
        let x_max = index.iter().max().copied().ok_or(FigureError::EmptyData)?;

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &v in columns.into_iter().flatten() {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return Err(FigureError::EmptyData);
        }

        let pad = Y_PAD_FRACTION * (y_max - y_min);
        let bounds = Self {
            x_min,
            x_max: x_max + x_trailing_margin(),
            y_min: y_min - pad,
            y_max: y_max + pad,
        };
        debug!(
            x_min = %bounds.x_min, x_max = %bounds.x_max,
            y_min = bounds.y_min, y_max = bounds.y_max,
            "computed axis bounds"
        );
        Ok(bounds)
    }

    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        Self::compute(dataset.index(), dataset.columns().iter().map(|c| c.values.as_slice()))
    }

    /// X limits in plot coordinates (days since the Unix epoch).
    pub fn x_limits(&self) -> (f64, f64) {
        (date_to_num(&self.x_min), date_to_num(&self.x_max))
    }

    pub fn y_limits(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }
}

/// Fractional days since 1970-01-01T00:00:00Z.
pub fn date_to_num<T: TimeZone>(dt: &DateTime<T>) -> f64 {
    dt.timestamp_millis() as f64 / 86_400_000.0
}

/// Inverse of [`date_to_num`], expressed in `tz`.
pub fn num_to_date(num: f64, tz: Tz) -> Option<DateTime<Tz>> {
    let millis = (num * 86_400_000.0).round() as i64;
    DateTime::<Utc>::from_timestamp_millis(millis).map(|utc| utc.with_timezone(&tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_num_roundtrip_is_exact_for_midnights() {
        let ds = Dataset::sample(Tz::EST).unwrap();
        let first = ds.index()[0];
        // 2000-01-01T05:00Z is 10957 days plus 5 hours after the epoch.
        assert!((date_to_num(&first) - (10957.0 + 5.0 / 24.0)).abs() < 1e-9);
        assert_eq!(num_to_date(date_to_num(&first), Tz::EST), Some(first));
    }
}
