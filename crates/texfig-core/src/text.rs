// File: crates/texfig-core/src/text.rs
// Summary: Text extent estimation for layout, and LaTeX escaping for exported labels.

use crate::types::POINTS_PER_INCH;

/// Estimated size of a (possibly multi-line) text block, in inches.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Font-independent text measurement. Real glyph metrics only exist once
/// LaTeX typesets the output, so widths are estimated from an average glyph
/// advance.
#[derive(Clone, Copy, Debug)]
pub struct TextMetrics {
    /// Average glyph advance in em.
    pub avg_char_em: f64,
    /// Baseline-to-baseline distance in em.
    pub line_spacing_em: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self { avg_char_em: 0.5, line_spacing_em: 1.2 }
    }
}

impl TextMetrics {
    pub fn measure(&self, text: &str, size_pt: f64) -> Extent {
        if text.is_empty() {
            return Extent::default();
        }
        let em = size_pt / POINTS_PER_INCH;
        let lines = text.lines().count().max(1);
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        Extent {
            width: longest as f64 * self.avg_char_em * em,
            height: lines as f64 * self.line_spacing_em * em,
        }
    }

    /// Largest width and height over several labels.
    pub fn measure_max<'a>(&self, texts: impl IntoIterator<Item = &'a str>, size_pt: f64) -> Extent {
        texts.into_iter().fold(Extent::default(), |acc, t| {
            let e = self.measure(t, size_pt);
            Extent { width: acc.width.max(e.width), height: acc.height.max(e.height) }
        })
    }
}

/// Escape characters with special meaning in LaTeX text mode.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\u{2212}' => out.push_str("\\ensuremath{-}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape each line and join them with `\\`.
pub fn latex_lines(text: &str) -> String {
    text.lines().map(escape_latex).collect::<Vec<_>>().join("\\\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_extent() {
        let m = TextMetrics::default();
        let e = m.measure("01-01\nSat", 10.0);
        assert!((e.width - 5.0 * 0.5 * 10.0 / 72.0).abs() < 1e-12);
        assert!((e.height - 2.0 * 1.2 * 10.0 / 72.0).abs() < 1e-12);
        assert_eq!(m.measure("", 10.0), Extent::default());
    }

    #[test]
    fn escapes_specials() {
        assert_eq!(escape_latex("50% of $x_1$ & {y}"), "50\\% of \\$x\\_1\\$ \\& \\{y\\}");
        assert_eq!(escape_latex("a~b^c\\"), "a\\textasciitilde{}b\\textasciicircum{}c\\textbackslash{}");
        assert_eq!(latex_lines("01-01\nSat"), "01-01\\\\Sat");
        assert_eq!(escape_latex("\u{2212}2"), "\\ensuremath{-}2");
    }
}
