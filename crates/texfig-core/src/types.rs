// File: crates/texfig-core/src/types.rs
// Summary: Shared types and constants (figure size, line widths, paddings).

/// Usable text width of an A4 page with 1in margins: 8.3in - 2 * 1in.
pub const TEXT_WIDTH_IN: f64 = 6.3;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f64 = 4.0;
/// PostScript points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Spine (axes frame) line width in points.
pub const SPINE_LINEWIDTH_PT: f64 = 0.8;
/// Line series width in points.
pub const LINE_WIDTH_PT: f64 = 1.5;
/// Scatter marker area in points squared.
pub const MARKER_AREA_PT2: f64 = 36.0;
/// Major tick length and tick-to-label gap, in points.
pub const TICK_SIZE_PT: f64 = 3.5;
pub const TICK_PAD_PT: f64 = 3.5;
pub const TICK_WIDTH_PT: f64 = 0.8;
/// Gap between tick labels and axis label, in points.
pub const LABEL_PAD_PT: f64 = 4.0;
/// Gap between the axes top and the title baseline, in points.
pub const TITLE_PAD_PT: f64 = 6.0;

#[inline]
pub fn pt_to_in(pt: f64) -> f64 { pt / POINTS_PER_INCH }

/// Axes placement as fractions of the figure.
/// Contract: `left < right` and `bottom < top`, all within [0, 1];
/// `right` and `top` are measured from the left/bottom figure edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl SubplotParams {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self { left, right, bottom, top }
    }
    /// Axes width as a fraction of figure width.
    pub fn width(&self) -> f64 { self.right - self.left }
    /// Axes height as a fraction of figure height.
    pub fn height(&self) -> f64 { self.top - self.bottom }
    pub fn is_valid(&self) -> bool {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        self.left < self.right
            && self.bottom < self.top
            && [self.left, self.right, self.bottom, self.top].into_iter().all(in_unit)
    }
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self::new(0.125, 0.9, 0.11, 0.88)
    }
}
