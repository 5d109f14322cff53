// File: crates/texfig-core/src/scale.rs
// Summary: Data-to-figure transform (inches from the bottom-left corner of the figure).

use crate::axis::Axis;
use crate::geometry::Rect;

/// Maps axis data coordinates onto the axes rectangle.
#[derive(Clone, Copy, Debug)]
pub struct DataTransform {
    pub frame: Rect,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl DataTransform {
    pub fn new(frame: Rect, x: &Axis, y: &Axis) -> Self {
        Self {
            frame,
            x_min: x.min,
            x_span: nonzero(x.span()),
            y_min: y.min,
            y_span: nonzero(y.span()),
        }
    }

    #[inline]
    pub fn to_x(&self, x: f64) -> f64 {
        self.frame.left + (x - self.x_min) / self.x_span * self.frame.width()
    }

    #[inline]
    pub fn to_y(&self, y: f64) -> f64 {
        self.frame.bottom + (y - self.y_min) / self.y_span * self.frame.height()
    }

    pub fn to_point(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (self.to_x(x), self.to_y(y))
    }
}

// Collapsed limits (equal y values) map everything onto the lower edge
// instead of dividing by zero.
fn nonzero(span: f64) -> f64 {
    if span.abs() < 1e-12 { 1.0 } else { span }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_limits_to_frame_edges() {
        let frame = Rect::from_lbrt(1.0, 0.5, 5.0, 3.5);
        let t = DataTransform::new(frame, &Axis::new("", 0.0, 10.0), &Axis::new("", -1.0, 11.0));
        assert_eq!(t.to_point((0.0, -1.0)), (1.0, 0.5));
        assert_eq!(t.to_point((10.0, 11.0)), (5.0, 3.5));
        assert!((t.to_x(5.0) - 3.0).abs() < 1e-12);
    }
}
