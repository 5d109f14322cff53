// File: crates/texfig-core/src/export/pgf.rs
// Summary: PGF backend; emits pgfpicture drawing commands positioned in inches.

use serde::{Deserialize, Serialize};

use super::num;
use crate::figure::{Axes, Figure, Spines};
use crate::geometry::Rect;
use crate::layout::{tick_label_offset, Decorations};
use crate::scale::DataTransform;
use crate::series::{Series, SeriesType};
use crate::style::{Color, StyleConfig, TexSystem, TextRole};
use crate::text::{escape_latex, latex_lines};
use crate::types::{pt_to_in, LABEL_PAD_PT, TICK_SIZE_PT, TICK_WIDTH_PT, TITLE_PAD_PT};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PgfOptions {
    /// Clip series to the axes rectangle.
    pub clip_data: bool,
}

impl Default for PgfOptions {
    fn default() -> Self {
        Self { clip_data: true }
    }
}

/// Accumulates PGF commands; every emitted line ends in `%`.
#[derive(Debug, Default)]
struct PgfCanvas {
    body: Vec<String>,
}

impl PgfCanvas {
    fn push(&mut self, cmd: impl Into<String>) {
        let mut line = cmd.into();
        line.push('%');
        self.body.push(line);
    }

    fn begin_scope(&mut self) { self.push("\\begin{pgfscope}"); }
    fn end_scope(&mut self) { self.push("\\end{pgfscope}"); }

    fn rectangle(&mut self, r: Rect) {
        self.push(format!(
            "\\pgfpathrectangle{{\\pgfqpoint{{{}in}}{{{}in}}}}{{\\pgfqpoint{{{}in}}{{{}in}}}}",
            num(r.left), num(r.bottom), num(r.width()), num(r.height())
        ));
    }

    fn clip_rect(&mut self, r: Rect) {
        self.rectangle(r);
        self.push("\\pgfusepath{clip}");
    }

    fn set_stroke(&mut self, color: Color, width_pt: f64) {
        let (r, g, b) = color.unit_rgb();
        self.push(format!("\\pgfsetlinewidth{{{}pt}}", num(width_pt)));
        self.push(format!("\\definecolor{{currentstroke}}{{rgb}}{{{},{},{}}}", num(r), num(g), num(b)));
        self.push("\\pgfsetstrokecolor{currentstroke}");
    }

    fn set_fill(&mut self, color: Color) {
        let (r, g, b) = color.unit_rgb();
        self.push(format!("\\definecolor{{currentfill}}{{rgb}}{{{},{},{}}}", num(r), num(g), num(b)));
        self.push("\\pgfsetfillcolor{currentfill}");
    }

    fn polyline(&mut self, points: &[(f64, f64)]) {
        let Some((&(x0, y0), rest)) = points.split_first() else { return };
        self.push(format!("\\pgfpathmoveto{{\\pgfqpoint{{{}in}}{{{}in}}}}", num(x0), num(y0)));
        for &(x, y) in rest {
            self.push(format!("\\pgfpathlineto{{\\pgfqpoint{{{}in}}{{{}in}}}}", num(x), num(y)));
        }
    }

    fn circle(&mut self, (cx, cy): (f64, f64), radius_pt: f64) {
        self.push(format!(
            "\\pgfpathcircle{{\\pgfqpoint{{{}in}}{{{}in}}}}{{{}pt}}",
            num(cx), num(cy), num(radius_pt)
        ));
    }

    fn stroke(&mut self) { self.push("\\pgfusepath{stroke}"); }
    fn fill(&mut self) { self.push("\\pgfusepath{fill}"); }

    /// `anchor` is a pgftext alignment such as `top`, `right` or `base,left`.
    fn text(&mut self, (x, y): (f64, f64), anchor: &str, rotate: Option<f64>, body: &str) {
        let rotate = rotate.map(|deg| format!(",rotate={}", num(deg))).unwrap_or_default();
        self.push(format!(
            "\\pgftext[x={}in,y={}in,{}{}]{{{}}}",
            num(x), num(y), anchor, rotate, body
        ));
    }
}

fn label_body(style: &StyleConfig, role: TextRole, text: &str) -> String {
    let content = if text.contains('\n') {
        format!("\\shortstack{{{}}}", latex_lines(text))
    } else {
        escape_latex(text)
    };
    format!("{} {}", style.latex_font(role), content)
}

fn header(fig: &Figure) -> String {
    let engine = fig.style.tex_system;
    let mut lines = vec![
        format!("%% Creator: texfig-core {}", env!("CARGO_PKG_VERSION")),
        format!("%% Engine: {}", engine.name()),
        "%%".to_string(),
        "%% Load in the preamble:".to_string(),
        "%%   \\usepackage{pgf}".to_string(),
    ];
    if matches!(engine, TexSystem::Xelatex | TexSystem::Lualatex) {
        lines.push("%%   \\usepackage{fontspec}".to_string());
    }
    lines.extend([
        "%%".to_string(),
        "%% Include with:".to_string(),
        "%%   \\resizebox{.5\\textwidth}{!}{\\input{figure.pgf}}".to_string(),
        "%%".to_string(),
    ]);
    lines.join("\n")
}

fn draw_series(c: &mut PgfCanvas, s: &Series, t: &DataTransform) {
    let points: Vec<(f64, f64)> = s.data_xy.iter().map(|&p| t.to_point(p)).collect();
    c.begin_scope();
    match s.series_type {
        SeriesType::Line => {
            c.push("\\pgfsetroundjoin");
            c.push("\\pgfsetroundcap");
            c.set_stroke(s.color, s.line_width);
            c.polyline(&points);
            c.stroke();
        }
        SeriesType::Scatter => {
            c.set_fill(s.color);
            for &p in &points {
                c.circle(p, s.marker_radius_pt());
            }
            c.fill();
        }
    }
    c.end_scope();
}

fn draw_spines(c: &mut PgfCanvas, frame: Rect, spines: &Spines) {
    let sides = [
        (spines.left, [(frame.left, frame.bottom), (frame.left, frame.top)]),
        (spines.right, [(frame.right, frame.bottom), (frame.right, frame.top)]),
        (spines.bottom, [(frame.left, frame.bottom), (frame.right, frame.bottom)]),
        (spines.top, [(frame.left, frame.top), (frame.right, frame.top)]),
    ];
    for (width, line) in sides {
        if width <= 0.0 {
            continue;
        }
        c.begin_scope();
        c.push("\\pgfsetrectcap");
        c.push("\\pgfsetmiterjoin");
        c.set_stroke(Color::BLACK, width);
        c.polyline(&line);
        c.stroke();
        c.end_scope();
    }
}

fn draw_legend(c: &mut PgfCanvas, fig: &Figure, ax: &Axes, frame: Rect) {
    let Some(legend) = &ax.legend else { return };
    let entries: Vec<(&Series, &str)> = ax.labelled_series().collect();
    if entries.is_empty() {
        return;
    }
    let style = &fig.style;
    let m = &fig.metrics;
    let entry_size = style.size_of(TextRole::Legend);
    let line_h = m.measure("X", entry_size).height;
    let sample_w = 2.0 * line_h;
    let gap = 0.5 * line_h;
    let inset = 0.5 * line_h;

    let title = legend.title.as_deref().filter(|t| !t.is_empty());
    let title_ext = title
        .map(|t| m.measure(t, style.size_of(TextRole::LegendTitle)))
        .unwrap_or_default();
    let label_w = m.measure_max(entries.iter().map(|(_, l)| *l), entry_size).width;
    let width = (sample_w + gap + label_w).max(title_ext.width) + 2.0 * gap;
    let height = title_ext.height + entries.len() as f64 * line_h + 2.0 * gap;
    let boxed = Rect::from_lbrt(frame.right - inset - width, frame.top - inset - height, frame.right - inset, frame.top - inset);

    c.begin_scope();
    c.set_stroke(Color::rgb(204, 204, 204), TICK_WIDTH_PT);
    c.set_fill(Color::rgb(255, 255, 255));
    c.rectangle(boxed);
    c.push("\\pgfusepath{stroke,fill}");
    c.end_scope();

    let mut y = boxed.top - gap;
    if let Some(t) = title {
        c.text((boxed.center_x(), y), "top", None, &label_body(style, TextRole::LegendTitle, t));
        y -= title_ext.height;
    }
    for (s, label) in entries {
        let mid = y - 0.5 * line_h;
        let x0 = boxed.left + gap;
        c.begin_scope();
        match s.series_type {
            SeriesType::Line => {
                c.set_stroke(s.color, s.line_width);
                c.polyline(&[(x0, mid), (x0 + sample_w, mid)]);
                c.stroke();
            }
            SeriesType::Scatter => {
                c.set_fill(s.color);
                c.circle((x0 + 0.5 * sample_w, mid), s.marker_radius_pt());
                c.fill();
            }
        }
        c.end_scope();
        c.text((x0 + sample_w + gap, mid), "left", None, &label_body(style, TextRole::Legend, label));
        y -= line_h;
    }
}

pub fn render(fig: &Figure, opts: &PgfOptions) -> String {
    let mut c = PgfCanvas::default();
    let ax = fig.axes();
    let style = &fig.style;
    let frame = fig.axes_frame();
    let t = fig.transform();

    c.begin_scope();
    if opts.clip_data {
        c.clip_rect(frame);
    }
    for s in &ax.series {
        draw_series(&mut c, s, &t);
    }
    c.end_scope();

    draw_spines(&mut c, frame, &ax.spines);

    let xticks = ax.x_axis.ticks();
    let yticks = ax.y_axis.ticks();
    let tick_len = pt_to_in(TICK_SIZE_PT);
    let offset = tick_label_offset();

    c.begin_scope();
    c.set_stroke(Color::BLACK, TICK_WIDTH_PT);
    for tick in &xticks {
        let x = t.to_x(tick.value);
        c.polyline(&[(x, frame.bottom), (x, frame.bottom - tick_len)]);
    }
    for tick in &yticks {
        let y = t.to_y(tick.value);
        c.polyline(&[(frame.left, y), (frame.left - tick_len, y)]);
    }
    c.stroke();
    c.end_scope();

    for tick in &xticks {
        let body = label_body(style, TextRole::XTickLabel, &tick.label);
        c.text((t.to_x(tick.value), frame.bottom - offset), "top", None, &body);
    }
    for tick in &yticks {
        let body = label_body(style, TextRole::YTickLabel, &tick.label);
        c.text((frame.left - offset, t.to_y(tick.value)), "right", None, &body);
    }

    let dec = Decorations::measure(fig, &xticks, &yticks);
    let label_pad = pt_to_in(LABEL_PAD_PT);
    if !ax.x_axis.label.is_empty() {
        let below_ticks = if xticks.is_empty() { 0.0 } else { offset + dec.xtick_labels.height };
        let y = frame.bottom - below_ticks - label_pad;
        c.text((frame.center_x(), y), "top", None, &label_body(style, TextRole::AxesLabel, &ax.x_axis.label));
    }
    if !ax.y_axis.label.is_empty() {
        let beside_ticks = if yticks.is_empty() { 0.0 } else { offset + dec.ytick_labels.width };
        let x = frame.left - beside_ticks - label_pad;
        c.text((x, frame.center_y()), "bottom", Some(90.0), &label_body(style, TextRole::AxesLabel, &ax.y_axis.label));
    }
    if ax.has_title() {
        let y = frame.top + pt_to_in(TITLE_PAD_PT);
        c.text((frame.center_x(), y), "base", None, &label_body(style, TextRole::AxesTitle, ax.title()));
    }
    if let Some(sup) = fig.suptitle() {
        let pos = (0.5 * fig.width_in, 0.98 * fig.height_in);
        c.text(pos, "top", None, &label_body(style, TextRole::FigureTitle, sup));
    }

    draw_legend(&mut c, fig, ax, frame);

    let mut out = header(fig);
    out.push('\n');
    let mut open = PgfCanvas::default();
    open.push("\\begingroup");
    open.push("\\makeatletter");
    open.push("\\begin{pgfpicture}");
    open.rectangle(Rect::from_lbrt(0.0, 0.0, fig.width_in, fig.height_in));
    open.push("\\pgfusepath{use as bounding box, clip}");
    for line in open.body.into_iter().chain(c.body) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("\\end{pgfpicture}%\n\\makeatother%\n\\endgroup%\n");
    out
}
