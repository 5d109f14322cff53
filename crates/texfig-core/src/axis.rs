// File: crates/texfig-core/src/axis.rs
// Summary: Axis model with label, view limits, locator and formatter.

use crate::ticks::{self, Formatter, Locator, Tick};

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub locator: Locator,
    pub formatter: Formatter,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            locator: Locator::auto(),
            formatter: Formatter::Plain,
        }
    }

    pub fn default_x() -> Self { Self::new("", 0.0, 1.0) }
    pub fn default_y() -> Self { Self::new("", 0.0, 1.0) }

    pub fn set_limits(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// Calendar ticks; axis values are then fractional days since the Unix epoch.
    pub fn set_date_ticks(&mut self, locator: Locator, formatter: Formatter) {
        self.locator = locator;
        self.formatter = formatter;
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn ticks(&self) -> Vec<Tick> {
        ticks::ticks(&self.locator, &self.formatter, self.min, self.max)
    }
}
