// File: crates/texfig-core/src/figure.rs
// Summary: Figure and Axes model: series, labels, limits, layout and margin correction.

use tracing::warn;

use crate::axis::Axis;
use crate::bounds::DataBounds;
use crate::geometry::Rect;
use crate::layout;
use crate::margins;
use crate::scale::DataTransform;
use crate::series::{Series, SeriesType};
use crate::style::{cycle_color, StyleConfig};
use crate::text::TextMetrics;
use crate::types::{SubplotParams, FIGURE_HEIGHT_IN, SPINE_LINEWIDTH_PT, TEXT_WIDTH_IN};

/// Line widths of the four axes borders, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spines {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            left: SPINE_LINEWIDTH_PT,
            right: SPINE_LINEWIDTH_PT,
            bottom: SPINE_LINEWIDTH_PT,
            top: SPINE_LINEWIDTH_PT,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Legend {
    pub title: Option<String>,
}

pub struct Axes {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub spines: Spines,
    pub legend: Option<Legend>,
    title: String,
    color_index: usize,
}

impl Axes {
    pub fn new() -> Self {
        Self {
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            series: Vec::new(),
            spines: Spines::default(),
            legend: None,
            title: String::new(),
            color_index: 0,
        }
    }

    fn add(&mut self, series_type: SeriesType, xs: &[f64], ys: &[f64]) -> &mut Series {
        let color = cycle_color(self.color_index);
        self.color_index += 1;
        self.series.push(Series::from_columns(series_type, xs, ys, color));
        let last = self.series.len() - 1;
        &mut self.series[last]
    }

    /// Add a line series using the next cycle colour.
    pub fn plot(&mut self, xs: &[f64], ys: &[f64]) -> &mut Series {
        self.add(SeriesType::Line, xs, ys)
    }

    /// Add a scatter series using the next cycle colour.
    pub fn scatter(&mut self, xs: &[f64], ys: &[f64]) -> &mut Series {
        self.add(SeriesType::Scatter, xs, ys)
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) { self.x_axis.label = label.into(); }
    pub fn set_ylabel(&mut self, label: impl Into<String>) { self.y_axis.label = label.into(); }
    pub fn set_title(&mut self, title: impl Into<String>) { self.title = title.into(); }
    pub fn title(&self) -> &str { &self.title }
    pub fn has_title(&self) -> bool { !self.title.is_empty() }

    pub fn set_xlim(&mut self, min: f64, max: f64) { self.x_axis.set_limits(min, max); }
    pub fn set_ylim(&mut self, min: f64, max: f64) { self.y_axis.set_limits(min, max); }

    pub fn apply_bounds(&mut self, bounds: &DataBounds) {
        let (x0, x1) = bounds.x_limits();
        let (y0, y1) = bounds.y_limits();
        self.set_xlim(x0, x1);
        self.set_ylim(y0, y1);
    }

    /// Show a legend for labelled series.
    pub fn legend(&mut self, title: Option<String>) {
        self.legend = Some(Legend { title });
    }

    pub fn labelled_series(&self) -> impl Iterator<Item = (&Series, &str)> {
        self.series.iter().filter_map(|s| s.label.as_deref().map(|l| (s, l)))
    }
}

impl Default for Axes {
    fn default() -> Self { Self::new() }
}

/// Drawing surface of a fixed physical size holding a single axes.
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub style: StyleConfig,
    pub subplot: SubplotParams,
    pub metrics: TextMetrics,
    suptitle: Option<String>,
    axes: Axes,
}

impl Figure {
    pub fn new(width_in: f64, height_in: f64, style: StyleConfig) -> Self {
        Self {
            width_in,
            height_in,
            style,
            subplot: SubplotParams::default(),
            metrics: TextMetrics::default(),
            suptitle: None,
            axes: Axes::new(),
        }
    }

    /// Text-width figure (6.3in x 4in).
    pub fn text_width(style: StyleConfig) -> Self {
        Self::new(TEXT_WIDTH_IN, FIGURE_HEIGHT_IN, style)
    }

    pub fn axes(&self) -> &Axes { &self.axes }
    pub fn axes_mut(&mut self) -> &mut Axes { &mut self.axes }

    pub fn set_suptitle(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.suptitle = if title.is_empty() { None } else { Some(title) };
    }
    pub fn suptitle(&self) -> Option<&str> { self.suptitle.as_deref() }

    pub fn subplots_adjust(&mut self, params: SubplotParams) {
        self.subplot = params;
    }

    /// Fit margins around tick labels, axis labels and titles.
    /// `pad` is a multiple of the base font size. A layout that would leave
    /// no room for the axes keeps the current params.
    pub fn tight_layout(&mut self, pad: f64) {
        match layout::tight_subplot_params(self, pad) {
            Some(params) => self.subplot = params,
            None => warn!(
                width_in = self.width_in, height_in = self.height_in,
                "tight layout does not fit the figure; keeping current margins"
            ),
        }
    }

    /// Apply [`margins::eliminate_whitespace`] using the top spine width and title state.
    pub fn eliminate_whitespace(&mut self) {
        let params = margins::eliminate_whitespace(
            self.subplot,
            self.axes.spines.top,
            self.height_in,
            self.axes.has_title(),
        );
        self.subplots_adjust(params);
    }

    /// Axes rectangle in inches.
    pub fn axes_frame(&self) -> Rect {
        Rect::from_subplot(&self.subplot, self.width_in, self.height_in)
    }

    pub fn transform(&self) -> DataTransform {
        DataTransform::new(self.axes_frame(), &self.axes.x_axis, &self.axes.y_axis)
    }
}
