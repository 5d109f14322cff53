// File: crates/texfig-core/src/geometry.rs
// Summary: Lightweight geometry helpers for figure-space math (inches, origin bottom-left).

use crate::types::SubplotParams;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Rect {
    pub const fn from_lbrt(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self { left, bottom, right, top }
    }
    /// Axes rectangle in inches for a figure of the given size.
    pub fn from_subplot(params: &SubplotParams, width_in: f64, height_in: f64) -> Self {
        Self {
            left: params.left * width_in,
            bottom: params.bottom * height_in,
            right: params.right * width_in,
            top: params.top * height_in,
        }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.top - self.bottom }
    pub fn center_x(&self) -> f64 { 0.5 * (self.left + self.right) }
    pub fn center_y(&self) -> f64 { 0.5 * (self.bottom + self.top) }
}
