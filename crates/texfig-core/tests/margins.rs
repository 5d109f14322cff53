// File: crates/texfig-core/tests/margins.rs
// Purpose: Whitespace elimination on hand-picked subplot params and on a laid-out figure.

use texfig_core::margins::spine_relative_height;
use texfig_core::{eliminate_whitespace, FigureConfig, SubplotParams};

const EPS: f64 = 1e-6;

#[test]
fn horizontal_margins_become_symmetric() {
    let auto = SubplotParams::new(0.1, 0.95, 0.15, 0.9);
    let p = eliminate_whitespace(auto, 0.8, 4.0, false);
    assert!((p.left - 0.1).abs() < EPS);
    assert!((p.right - 0.9).abs() < EPS);
    assert_eq!(p.bottom, 0.15);

    let auto = SubplotParams::new(0.05, 0.8, 0.15, 0.9);
    let p = eliminate_whitespace(auto, 0.8, 4.0, false);
    assert!((p.left - 0.2).abs() < EPS);
    assert!((p.right - 0.8).abs() < EPS);
}

#[test]
fn untitled_top_keeps_half_the_spine() {
    let rel = spine_relative_height(0.8, 4.0);
    assert!((rel - 0.0027778).abs() < EPS);

    let p = eliminate_whitespace(SubplotParams::default(), 0.8, 4.0, false);
    assert!((p.top - 0.9986111).abs() < EPS);
}

#[test]
fn titled_top_is_untouched() {
    let auto = SubplotParams::new(0.1, 0.95, 0.15, 0.87);
    let p = eliminate_whitespace(auto, 0.8, 4.0, true);
    assert_eq!(p.top, 0.87);
    assert_eq!(p.bottom, 0.15);
}

#[test]
fn built_figure_is_centered_and_valid() {
    let fig = texfig_core::pipeline::build_figure(&FigureConfig::default()).expect("figure");
    let p = fig.subplot;
    assert!(p.is_valid(), "{p:?}");
    assert!((p.left - (1.0 - p.right)).abs() < EPS);
    assert!((p.top - 0.9986111).abs() < EPS);
}
