// File: crates/texfig-core/src/layout.rs
// Summary: Tight layout; derives subplot params from estimated decoration extents.

use crate::figure::Figure;
use crate::geometry::Rect;
use crate::scale::DataTransform;
use crate::style::TextRole;
use crate::text::Extent;
use crate::ticks::Tick;
use crate::types::{pt_to_in, SubplotParams, LABEL_PAD_PT, TICK_PAD_PT, TICK_SIZE_PT, TITLE_PAD_PT};

/// Space taken by decorations on each side of the axes, in inches.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Sizes of the text blocks placed around the axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decorations {
    pub xtick_labels: Extent,
    pub ytick_labels: Extent,
    pub x_label: Extent,
    pub y_label: Extent,
    pub title: Extent,
    pub suptitle: Extent,
}

impl Decorations {
    pub fn measure(fig: &Figure, xticks: &[Tick], yticks: &[Tick]) -> Self {
        let m = &fig.metrics;
        let style = &fig.style;
        let ax = fig.axes();
        Self {
            xtick_labels: m.measure_max(xticks.iter().map(|t| t.label.as_str()), style.size_of(TextRole::XTickLabel)),
            ytick_labels: m.measure_max(yticks.iter().map(|t| t.label.as_str()), style.size_of(TextRole::YTickLabel)),
            x_label: m.measure(&ax.x_axis.label, style.size_of(TextRole::AxesLabel)),
            y_label: m.measure(&ax.y_axis.label, style.size_of(TextRole::AxesLabel)),
            title: m.measure(ax.title(), style.size_of(TextRole::AxesTitle)),
            suptitle: m.measure(fig.suptitle().unwrap_or(""), style.size_of(TextRole::FigureTitle)),
        }
    }
}

/// Distance from the axes edge to the outer side of the tick labels.
pub fn tick_label_offset() -> f64 {
    pt_to_in(TICK_SIZE_PT + TICK_PAD_PT)
}

fn decoration_insets(dec: &Decorations, has_xticks: bool, has_yticks: bool, pad: f64) -> Insets {
    let side = |labels: Extent, label_h: f64, has_ticks: bool, along: fn(Extent) -> f64| {
        let ticks = if has_ticks { along(labels) + tick_label_offset() } else { 0.0 };
        let label = if label_h > 0.0 { label_h + pt_to_in(LABEL_PAD_PT) } else { 0.0 };
        pad + ticks + label
    };
    let title = if dec.title.height > 0.0 { dec.title.height + pt_to_in(TITLE_PAD_PT) } else { 0.0 };
    let suptitle = if dec.suptitle.height > 0.0 { dec.suptitle.height + pad } else { 0.0 };
    Insets {
        // The y label is rotated, so its height is horizontal extent.
        left: side(dec.ytick_labels, dec.y_label.height, has_yticks, |e| e.width),
        right: pad,
        bottom: side(dec.xtick_labels, dec.x_label.height, has_xticks, |e| e.height),
        top: pad + title + suptitle,
    }
}

fn params_from_insets(ins: &Insets, width: f64, height: f64) -> SubplotParams {
    SubplotParams {
        left: ins.left / width,
        right: 1.0 - ins.right / width,
        bottom: ins.bottom / height,
        top: 1.0 - ins.top / height,
    }
}

/// Grow insets so tick labels centred on ticks near the axes corners stay on the page.
fn add_overhang(ins: &mut Insets, fig: &Figure, frame: Rect, dec: &Decorations, xticks: &[Tick], yticks: &[Tick], pad: f64) {
    let ax = fig.axes();
    let t = DataTransform::new(frame, &ax.x_axis, &ax.y_axis);

    let half_w = 0.5 * dec.xtick_labels.width;
    if let (Some(first), Some(last)) = (xticks.first(), xticks.last()) {
        let leftmost = t.to_x(first.value) - half_w;
        let rightmost = t.to_x(last.value) + half_w;
        if leftmost < pad {
            ins.left += pad - leftmost;
        }
        if rightmost > fig.width_in - pad {
            ins.right += rightmost - (fig.width_in - pad);
        }
    }

    let half_h = 0.5 * dec.ytick_labels.height;
    if let Some(top_tick) = yticks.last() {
        let topmost = t.to_y(top_tick.value) + half_h;
        if topmost > fig.height_in - pad {
            ins.top += topmost - (fig.height_in - pad);
        }
    }
}

/// Subplot params leaving `pad` (in multiples of the base font size) around all
/// decorations, or `None` when the axes would have no room left.
pub fn tight_subplot_params(fig: &Figure, pad: f64) -> Option<SubplotParams> {
    let pad_in = pad * pt_to_in(fig.style.font_size);
    let ax = fig.axes();
    let xticks = ax.x_axis.ticks();
    let yticks = ax.y_axis.ticks();
    let dec = Decorations::measure(fig, &xticks, &yticks);

    let mut ins = decoration_insets(&dec, !xticks.is_empty(), !yticks.is_empty(), pad_in);
    let first = params_from_insets(&ins, fig.width_in, fig.height_in);
    if !first.is_valid() {
        return None;
    }

    let frame = Rect::from_subplot(&first, fig.width_in, fig.height_in);
    add_overhang(&mut ins, fig, frame, &dec, &xticks, &yticks, pad_in);
    let params = params_from_insets(&ins, fig.width_in, fig.height_in);
    params.is_valid().then_some(params)
}
