// File: crates/texfig-core/src/ticks.rs
// Summary: Tick locators (nice numbers, calendar days) and label formatters.

use std::fmt::Write as _;

use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use tracing::warn;

use crate::bounds::{date_to_num, num_to_date};
use crate::dataset::local_midnight;

/// Upper bound on generated ticks; anything past it is dropped with a warning.
pub const MAX_TICKS: usize = 1000;

const EPS: f64 = 1e-10;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in data coordinates.
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Locator {
    /// At most `nbins` intervals with a step from `steps` times a power of ten.
    Auto { nbins: usize, steps: Vec<f64> },
    /// Every `interval`-th local midnight in `tz`.
    Day { interval: u32, tz: Tz },
}

impl Locator {
    pub fn auto() -> Self {
        Locator::Auto { nbins: 9, steps: vec![1.0, 2.0, 2.5, 5.0, 10.0] }
    }

    pub fn days(interval: u32, tz: Tz) -> Self {
        Locator::Day { interval: interval.max(1), tz }
    }

    /// Tick positions within `[vmin, vmax]`, ascending.
    pub fn locate(&self, vmin: f64, vmax: f64) -> Vec<f64> {
        let (vmin, vmax) = if vmin <= vmax { (vmin, vmax) } else { (vmax, vmin) };
        if !vmin.is_finite() || !vmax.is_finite() {
            return Vec::new();
        }
        match self {
            Locator::Auto { nbins, steps } => nice_ticks(vmin, vmax, *nbins, steps),
            Locator::Day { interval, tz } => day_ticks(vmin, vmax, *interval, *tz),
        }
    }

    /// `true` when the locator carries information pgfplots cannot reproduce
    /// on its own (calendar-aligned positions).
    pub fn is_custom(&self) -> bool {
        matches!(self, Locator::Day { .. })
    }
}

fn nice_ticks(vmin: f64, vmax: f64, nbins: usize, steps: &[f64]) -> Vec<f64> {
    let nbins = nbins.max(1) as f64;
    let span = vmax - vmin;
    if span <= 0.0 {
        return vec![vmin];
    }
    let exp = (span / nbins).log10().floor() as i32;
    let at = |k: f64, s: f64| {
        if exp >= 0 { k * s * 10f64.powi(exp) } else { k * s / 10f64.powi(-exp) }
    };

    let mut chosen = None;
    for &s in steps {
        let step = at(1.0, s);
        let lo = (vmin / step + EPS).floor();
        let hi = (vmax / step - EPS).ceil();
        if hi - lo <= nbins {
            chosen = Some((s, lo, hi));
            break;
        }
    }
    // No step fit within `nbins`: fall back to the widest one.
    let (s, lo, hi) = chosen.unwrap_or_else(|| {
        let s = steps.last().copied().unwrap_or(10.0);
        let step = at(1.0, s);
        (s, (vmin / step).floor(), (vmax / step).ceil())
    });
    collect_in_range(lo, hi, |k| at(k, s), vmin, vmax)
}

fn collect_in_range(lo: f64, hi: f64, value: impl Fn(f64) -> f64, vmin: f64, vmax: f64) -> Vec<f64> {
    let tol = (vmax - vmin).abs() * EPS;
    let mut out = Vec::new();
    let mut k = lo;
    while k <= hi && out.len() < MAX_TICKS {
        let v = value(k);
        if v >= vmin - tol && v <= vmax + tol {
            out.push(if v == 0.0 { 0.0 } else { v });
        }
        k += 1.0;
    }
    out
}

fn day_ticks(vmin: f64, vmax: f64, interval: u32, tz: Tz) -> Vec<f64> {
    let (Some(start), Some(end)) = (num_to_date(vmin, tz), num_to_date(vmax, tz)) else {
        return Vec::new();
    };
    let first: NaiveDate = start.date_naive();
    let last: NaiveDate = end.date_naive();

    let mut out = Vec::new();
    let mut day = first;
    while day <= last {
        if out.len() >= MAX_TICKS {
            warn!(max = MAX_TICKS, %first, %last, "day locator exceeded tick limit, truncating");
            break;
        }
        if let Ok(midnight) = local_midnight(day, tz) {
            let v = date_to_num(&midnight);
            if v >= vmin - EPS && v <= vmax + EPS {
                out.push(v);
            }
        }
        match day.checked_add_days(Days::new(interval as u64)) {
            Some(next) => day = next,
            None => break,
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub enum Formatter {
    /// Shortest decimal representation.
    Plain,
    /// strftime `pattern` applied in `tz`; `\n` yields multi-line labels.
    Date { pattern: String, tz: Tz },
}

impl Formatter {
    pub fn date(pattern: impl Into<String>, tz: Tz) -> Self {
        Formatter::Date { pattern: pattern.into(), tz }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            Formatter::Plain => format_number(value),
            Formatter::Date { pattern, tz } => {
                let Some(dt) = num_to_date(value, *tz) else {
                    return format_number(value);
                };
                let mut out = String::new();
                match write!(out, "{}", dt.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => {
                        warn!(%pattern, "invalid date format pattern");
                        dt.to_rfc3339()
                    }
                }
            }
        }
    }
}

/// Shortest decimal form; negatives use U+2212 MINUS SIGN rather than a hyphen.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    let digits = if magnitude.fract() == 0.0 && magnitude < 1e15 {
        format!("{magnitude:.0}")
    } else {
        format!("{magnitude}")
    };
    if value < 0.0 { format!("\u{2212}{digits}") } else { digits }
}

/// Locate then label.
pub fn ticks(locator: &Locator, formatter: &Formatter, vmin: f64, vmax: f64) -> Vec<Tick> {
    locator
        .locate(vmin, vmax)
        .into_iter()
        .map(|value| Tick { value, label: formatter.format(value) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::DataBounds;
    use crate::dataset::Dataset;

    #[test]
    fn auto_locator_picks_step_two_for_padded_sample() {
        let got = Locator::auto().locate(-1.0, 11.0);
        assert_eq!(got, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn auto_locator_fractional_steps() {
        let got = Locator::auto().locate(0.0, 1.0);
        assert_eq!(got.first().copied(), Some(0.0));
        assert_eq!(got.last().copied(), Some(1.0));
        assert!(got.contains(&0.3) || got.contains(&0.2));
        assert!(got.len() <= 10);
    }

    #[test]
    fn auto_locator_degenerate_range() {
        assert_eq!(Locator::auto().locate(5.0, 5.0), vec![5.0]);
    }

    #[test]
    fn day_locator_covers_every_sample_day() {
        let ds = Dataset::sample(Tz::EST).unwrap();
        let b = DataBounds::from_dataset(&ds).unwrap();
        let (x0, x1) = b.x_limits();
        let locs = Locator::days(1, Tz::EST).locate(x0, x1);
        assert_eq!(locs.len(), 11);
        assert!((locs[0] - x0).abs() < 1e-9);
        assert!((locs[10] - date_to_num(&ds.index()[10])).abs() < 1e-9);
    }

    #[test]
    fn day_locator_interval() {
        let ds = Dataset::sample(Tz::EST).unwrap();
        let b = DataBounds::from_dataset(&ds).unwrap();
        let (x0, x1) = b.x_limits();
        assert_eq!(Locator::days(3, Tz::EST).locate(x0, x1).len(), 4);
    }

    #[test]
    fn date_labels_are_two_lines() {
        let ds = Dataset::sample(Tz::EST).unwrap();
        let f = Formatter::date("%m-%d\n%a", Tz::EST);
        assert_eq!(f.format(date_to_num(&ds.index()[0])), "01-01\nSat");
        assert_eq!(f.format(date_to_num(&ds.index()[10])), "01-11\nTue");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-2.0), "\u{2212}2");
        assert_eq!(format_number(2.5), "2.5");
    }
}
