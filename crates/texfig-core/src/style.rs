// File: crates/texfig-core/src/style.rs
// Summary: Explicit style configuration (fonts, TeX engine) and the default colour cycle.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Components scaled to [0, 1], as `\definecolor{..}{rgb}{..}` expects.
    pub fn unit_rgb(&self) -> (f64, f64, f64) {
        (self.r as f64 / 255.0, self.g as f64 / 255.0, self.b as f64 / 255.0)
    }
}

/// The ten-colour categorical cycle used for successive series.
const CYCLE: [Color; 10] = [
    Color::rgb(31, 119, 180),  // blue
    Color::rgb(255, 127, 14),  // orange
    Color::rgb(44, 160, 44),   // green
    Color::rgb(214, 39, 40),   // red
    Color::rgb(148, 103, 189), // purple
    Color::rgb(140, 86, 75),   // brown
    Color::rgb(227, 119, 194), // pink
    Color::rgb(127, 127, 127), // gray
    Color::rgb(188, 189, 34),  // olive
    Color::rgb(23, 190, 207),  // cyan
];

pub fn cycle_color(index: usize) -> Color {
    CYCLE[index % CYCLE.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Serif,
    SansSerif,
    Monospace,
}

impl FontFamily {
    /// LaTeX font family switch.
    pub fn latex_command(&self) -> &'static str {
        match self {
            FontFamily::Serif => "\\rmfamily",
            FontFamily::SansSerif => "\\sffamily",
            FontFamily::Monospace => "\\ttfamily",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TexSystem {
    Pdflatex,
    Xelatex,
    Lualatex,
}

impl TexSystem {
    pub fn name(&self) -> &'static str {
        match self {
            TexSystem::Pdflatex => "pdflatex",
            TexSystem::Xelatex => "xelatex",
            TexSystem::Lualatex => "lualatex",
        }
    }
}

/// Which text element a font size applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    FigureTitle,
    FigureLabel,
    AxesTitle,
    AxesLabel,
    LegendTitle,
    Legend,
    XTickLabel,
    YTickLabel,
}

/// Presentation options applied before drawing. Sizes are in points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_family: FontFamily,
    pub tex_system: TexSystem,
    /// Base size; paddings are expressed in multiples of it.
    pub font_size: f64,
    pub figure_title_size: f64,
    pub figure_label_size: f64,
    pub axes_title_size: f64,
    pub axes_label_size: f64,
    pub legend_title_size: f64,
    pub legend_size: f64,
    pub xtick_label_size: f64,
    pub ytick_label_size: f64,
}

impl Default for StyleConfig {
    /// LaTeX-matched sizes for a 12pt document class.
    fn default() -> Self {
        Self {
            font_family: FontFamily::Serif,
            tex_system: TexSystem::Pdflatex,
            font_size: 12.0,
            figure_title_size: 14.4,
            figure_label_size: 12.0,
            axes_title_size: 12.0,
            axes_label_size: 10.95,
            legend_title_size: 10.95,
            legend_size: 10.0,
            xtick_label_size: 10.0,
            ytick_label_size: 10.0,
        }
    }
}

impl StyleConfig {
    pub fn size_of(&self, role: TextRole) -> f64 {
        match role {
            TextRole::FigureTitle => self.figure_title_size,
            TextRole::FigureLabel => self.figure_label_size,
            TextRole::AxesTitle => self.axes_title_size,
            TextRole::AxesLabel => self.axes_label_size,
            TextRole::LegendTitle => self.legend_title_size,
            TextRole::Legend => self.legend_size,
            TextRole::XTickLabel => self.xtick_label_size,
            TextRole::YTickLabel => self.ytick_label_size,
        }
    }

    /// `\rmfamily\fontsize{10.00}{12.00}\selectfont` for the given role.
    pub fn latex_font(&self, role: TextRole) -> String {
        let size = self.size_of(role);
        format!(
            "{}\\fontsize{{{:.2}}}{{{:.2}}}\\selectfont",
            self.font_family.latex_command(),
            size,
            size * 1.2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let style: StyleConfig = toml::from_str(
            r#"
            font_family = "sans-serif"
            tex_system = "lualatex"
            xtick_label_size = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(style.font_family, FontFamily::SansSerif);
        assert_eq!(style.tex_system, TexSystem::Lualatex);
        assert_eq!(style.size_of(TextRole::XTickLabel), 8.0);
        assert_eq!(style.size_of(TextRole::AxesLabel), 10.95);
    }

    #[test]
    fn latex_font_command() {
        let style = StyleConfig::default();
        assert_eq!(
            style.latex_font(TextRole::XTickLabel),
            "\\rmfamily\\fontsize{10.00}{12.00}\\selectfont"
        );
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(cycle_color(0), cycle_color(10));
        assert_ne!(cycle_color(0), cycle_color(1));
    }
}
