// File: crates/texfig-core/src/margins.rs
// Summary: Post-layout margin correction so the exported figure has no dead border space.

use tracing::debug;

use crate::types::{SubplotParams, POINTS_PER_INCH};

/// Height of a line of `linewidth_pt` points as a fraction of a figure `figure_height_in` tall.
pub fn spine_relative_height(linewidth_pt: f64, figure_height_in: f64) -> f64 {
    linewidth_pt / POINTS_PER_INCH / figure_height_in
}

/// Tighten auto-layout margins.
///
/// Horizontal insets become symmetric, using the larger of the two. Without a
/// title the top inset only keeps room for half the top spine's thickness,
/// which is the part drawn outside the axes box; with a title the computed top
/// is left alone. `bottom` never changes. A zero `figure_height_in` is the
/// caller's problem.
pub fn eliminate_whitespace(
    auto: SubplotParams,
    spine_top_linewidth_pt: f64,
    figure_height_in: f64,
    has_title: bool,
) -> SubplotParams {
    let left = auto.left.max(1.0 - auto.right);
    let top = if has_title {
        auto.top
    } else {
        1.0 - 0.5 * spine_relative_height(spine_top_linewidth_pt, figure_height_in)
    };
    let adjusted = SubplotParams { left, right: 1.0 - left, bottom: auto.bottom, top };
    debug!(?auto, ?adjusted, has_title, "eliminated figure whitespace");
    adjusted
}
