// File: crates/texfig-core/src/export/tikz.rs
// Summary: TikZ backend; emits a pgfplots axis so LaTeX draws the plot natively.

use serde::{Deserialize, Serialize};

use super::num;
use crate::axis::Axis;
use crate::figure::Figure;
use crate::series::SeriesType;
use crate::style::TextRole;
use crate::text::{escape_latex, latex_lines};
use crate::ticks::Tick;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TikzOptions {
    /// pgfplots `width`; the figure width when unset (e.g. `6.3in`).
    pub axis_width: Option<String>,
    /// pgfplots `height`; the figure height when unset.
    pub axis_height: Option<String>,
    /// Write every tick position and label instead of letting pgfplots choose.
    pub strict: bool,
}

impl Default for TikzOptions {
    fn default() -> Self {
        Self { axis_width: None, axis_height: None, strict: true }
    }
}

/// Length in inches with the shortest decimal form, e.g. `6.3in` or `4in`.
pub fn inches(v: f64) -> String {
    format!("{v}in")
}

fn tick_label(label: &str) -> String {
    if label.contains('\n') { latex_lines(label) } else { escape_latex(label) }
}

fn tick_options(name: char, axis: &Axis, ticks: &[Tick], strict: bool, out: &mut Vec<String>) {
    out.push(format!("{name}tick style={{color=black}}"));
    if !(strict || axis.locator.is_custom()) {
        return;
    }
    let positions: Vec<String> = ticks.iter().map(|t| num(t.value)).collect();
    let labels: Vec<String> = ticks.iter().map(|t| format!("{{{}}}", tick_label(&t.label))).collect();
    out.push(format!("{name}tick={{{}}}", positions.join(",")));
    out.push(format!("{name}ticklabels={{{}}}", labels.join(",")));
}

fn axis_options(fig: &Figure, opts: &TikzOptions) -> Vec<String> {
    let ax = fig.axes();
    let style = &fig.style;
    let xticks = ax.x_axis.ticks();
    let yticks = ax.y_axis.ticks();

    let mut o = vec![
        format!("height={}", opts.axis_height.clone().unwrap_or_else(|| inches(fig.height_in))),
        format!("width={}", opts.axis_width.clone().unwrap_or_else(|| inches(fig.width_in))),
        "tick align=outside".to_string(),
        "tick pos=left".to_string(),
        "scaled x ticks=false".to_string(),
        "scaled y ticks=false".to_string(),
        format!("label style={{font={}}}", style.latex_font(TextRole::AxesLabel)),
    ];
    let multi_line = xticks.iter().any(|t| t.label.contains('\n'));
    o.push(format!(
        "xticklabel style={{font={}{}}}",
        style.latex_font(TextRole::XTickLabel),
        if multi_line { ", align=center" } else { "" }
    ));
    o.push(format!("yticklabel style={{font={}}}", style.latex_font(TextRole::YTickLabel)));
    if ax.has_title() {
        o.push(format!("title={{{}}}", escape_latex(ax.title())));
        o.push(format!("title style={{font={}}}", style.latex_font(TextRole::AxesTitle)));
    }
    if ax.legend.is_some() && ax.labelled_series().next().is_some() {
        o.push(format!(
            "legend style={{font={}, at={{(0.97,0.97)}}, anchor=north east, draw=lightgray204}}",
            style.latex_font(TextRole::Legend)
        ));
        o.push("legend cell align={left}".to_string());
    }

    if !ax.x_axis.label.is_empty() {
        o.push(format!("xlabel={{{}}}", escape_latex(&ax.x_axis.label)));
    }
    o.push(format!("xmin={}, xmax={}", num(ax.x_axis.min), num(ax.x_axis.max)));
    tick_options('x', &ax.x_axis, &xticks, opts.strict, &mut o);

    if !ax.y_axis.label.is_empty() {
        o.push(format!("ylabel={{{}}}", escape_latex(&ax.y_axis.label)));
    }
    o.push(format!("ymin={}, ymax={}", num(ax.y_axis.min), num(ax.y_axis.max)));
    tick_options('y', &ax.y_axis, &yticks, opts.strict, &mut o);
    o
}

pub fn render(fig: &Figure, opts: &TikzOptions) -> String {
    let ax = fig.axes();
    let style = &fig.style;
    let mut out: Vec<String> = vec![
        format!("% This file was created with texfig-core {}.", env!("CARGO_PKG_VERSION")),
        "% Load in the preamble:".to_string(),
        "%   \\usepackage{pgfplots}".to_string(),
        "%   \\pgfplotsset{compat=1.18}".to_string(),
        "%   \\usepackage{tikzscale}".to_string(),
        "% Include with:".to_string(),
        "%   \\includegraphics[width=.5\\textwidth]{figure.tikz}".to_string(),
        "\\begin{tikzpicture}".to_string(),
        String::new(),
        "\\definecolor{lightgray204}{RGB}{204,204,204}".to_string(),
    ];
    for (i, s) in ax.series.iter().enumerate() {
        out.push(format!("\\definecolor{{color{i}}}{{RGB}}{{{},{},{}}}", s.color.r, s.color.g, s.color.b));
    }
    out.push(String::new());

    out.push("\\begin{axis}[".to_string());
    out.push(axis_options(fig, opts).join(",\n"));
    out.push("]".to_string());

    let legend = ax.legend.as_ref().filter(|_| ax.labelled_series().next().is_some());
    if let Some(title) = legend.and_then(|l| l.title.as_deref()).filter(|t| !t.is_empty()) {
        out.push("\\addlegendimage{empty legend}".to_string());
        out.push(format!(
            "\\addlegendentry{{{} {}}}",
            style.latex_font(TextRole::LegendTitle),
            escape_latex(title)
        ));
    }

    for (i, s) in ax.series.iter().enumerate() {
        let plot_opts = match s.series_type {
            SeriesType::Line => format!("line width={}pt, color{i}", num(s.line_width)),
            SeriesType::Scatter => format!(
                "draw=color{i}, fill=color{i}, mark=*, only marks, mark size={}pt",
                num(s.marker_radius_pt())
            ),
        };
        out.push(format!("\\addplot [{plot_opts}]"));
        out.push("table {%".to_string());
        for &(x, y) in &s.data_xy {
            out.push(format!("{} {}", num(x), num(y)));
        }
        out.push("};".to_string());
        match (&legend, s.label.as_deref()) {
            (Some(_), Some(label)) => out.push(format!("\\addlegendentry{{{}}}", escape_latex(label))),
            (Some(_), None) => out.push("\\addlegendentry{}".to_string()),
            _ => {}
        }
    }
    out.push("\\end{axis}".to_string());

    if let Some(sup) = fig.suptitle() {
        out.push(String::new());
        out.push(format!(
            "\\node[anchor=south, font={}] at (current axis.outer north) {{{}}};",
            style.latex_font(TextRole::FigureTitle),
            escape_latex(sup)
        ));
    }
    out.push(String::new());
    out.push("\\end{tikzpicture}".to_string());

    let mut text = out.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleConfig;

    fn figure() -> Figure {
        let mut fig = Figure::text_width(StyleConfig::default());
        let ax = fig.axes_mut();
        ax.plot(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]);
        ax.set_xlim(0.0, 2.0);
        ax.set_ylim(-1.0, 3.0);
        fig
    }

    #[test]
    fn default_size_strings() {
        assert_eq!(inches(6.3), "6.3in");
        assert_eq!(inches(4.0), "4in");
        let text = render(&figure(), &TikzOptions::default());
        assert!(text.contains("height=4in,\nwidth=6.3in"));
    }

    #[test]
    fn strict_writes_every_tick() {
        let text = render(&figure(), &TikzOptions::default());
        assert!(text.contains("ytick={"));
        assert!(text.contains("yticklabels={{\\ensuremath{-}1},"));
        let loose = render(&figure(), &TikzOptions { strict: false, ..TikzOptions::default() });
        assert!(!loose.contains("ytick={"));
        assert!(!loose.contains("xtick={"));
    }

    #[test]
    fn explicit_axis_size_wins() {
        let opts = TikzOptions {
            axis_width: Some("\\linewidth".to_string()),
            axis_height: Some("5cm".to_string()),
            strict: true,
        };
        let text = render(&figure(), &opts);
        assert!(text.contains("height=5cm,\nwidth=\\linewidth"));
    }

    #[test]
    fn legend_entries_follow_plots() {
        let mut fig = figure();
        fig.axes_mut().series[0].set_label("col1");
        fig.axes_mut().legend(None);
        let text = render(&fig, &TikzOptions::default());
        assert!(text.contains("};\n\\addlegendentry{col1}"));
        assert!(text.contains("legend cell align={left}"));
    }
}
