// File: crates/texfig-core/src/series.rs
// Summary: Series model for line and scatter data drawn on an axes.

use crate::style::Color;
use crate::types::{LINE_WIDTH_PT, MARKER_AREA_PT2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub color: Color,
    /// Stroke width for lines, in points.
    pub line_width: f64,
    /// Marker area for scatter points, in points squared.
    pub marker_area: f64,
    pub label: Option<String>,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            series_type,
            data_xy: data,
            color,
            line_width: LINE_WIDTH_PT,
            marker_area: MARKER_AREA_PT2,
            label: None,
        }
    }

    /// Pair up x and y values; extra values on either side are ignored.
    pub fn from_columns(series_type: SeriesType, xs: &[f64], ys: &[f64], color: Color) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::with_data(series_type, data, color)
    }

    /// Legend entry text.
    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Marker radius in points; `marker_area` is the square of the marker diameter.
    pub fn marker_radius_pt(&self) -> f64 {
        0.5 * self.marker_area.max(0.0).sqrt()
    }
}
