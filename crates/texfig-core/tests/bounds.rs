// File: crates/texfig-core/tests/bounds.rs
// Purpose: Axis bounds for the sample dataset and the degenerate cases.

use chrono::Duration;
use chrono_tz::Tz;
use texfig_core::dataset::daily_index;
use texfig_core::{DataBounds, Dataset, FigureError};

#[test]
fn sample_bounds_pad_y_and_extend_x() {
    let ds = Dataset::sample(Tz::EST).expect("sample");
    let b = DataBounds::from_dataset(&ds).expect("bounds");

    assert!((b.y_min - -1.0).abs() < 1e-12);
    assert!((b.y_max - 11.0).abs() < 1e-12);
    assert_eq!(b.x_min, ds.index()[0]);
    assert_eq!(b.x_max, ds.index()[10] + Duration::hours(12));

    let (x0, x1) = b.x_limits();
    assert!((x1 - x0 - 10.5).abs() < 1e-9);
}

#[test]
fn equal_values_collapse_to_zero_padding() {
    let start = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let index = daily_index(start, 3, Tz::UTC).unwrap();
    let flat = [5.0, 5.0, 5.0];
    let b = DataBounds::compute(&index, [flat.as_slice()]).expect("bounds");
    assert_eq!(b.y_limits(), (5.0, 5.0));
}

#[test]
fn empty_input_is_an_error() {
    let none: [&[f64]; 0] = [];
    assert!(matches!(DataBounds::compute(&[], none), Err(FigureError::EmptyData)));

    let start = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let index = daily_index(start, 2, Tz::UTC).unwrap();
    let empty: &[f64] = &[];
    assert!(matches!(DataBounds::compute(&index, [empty]), Err(FigureError::EmptyData)));
}

#[test]
fn nan_values_are_left_out_of_the_extrema() {
    let start = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let index = daily_index(start, 3, Tz::UTC).unwrap();
    let values = [0.0, f64::NAN, 10.0];
    let b = DataBounds::compute(&index, [values.as_slice()]).expect("bounds");
    assert_eq!(b.y_limits(), (-1.0, 11.0));
}
