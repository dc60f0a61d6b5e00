use polyinterp::interpolation::errors::InterpolationError;
use polyinterp::interpolation::SampleSet;

use super::common::InterpResult;

#[test]
fn keeps_input_order() -> InterpResult {
    let s = SampleSet::new([3.0, 1.0, 2.0], [9.0, 1.0, 4.0])?;
    assert_eq!(s.xs(), &[3.0, 1.0, 2.0]);
    assert_eq!(s.ys(), &[9.0, 1.0, 4.0]);
    assert_eq!(s.len(), 3);
    assert!(!s.is_empty());
    Ok(())
}

#[test]
fn shape_error() {
    let err = SampleSet::new([1.0, 2.0, 3.0], [1.0, 2.0]).unwrap_err();
    assert_eq!(err, InterpolationError::Shape { x_len: 3, y_len: 2 });
}

#[test]
fn duplicate_abscissa_error() {
    let err = SampleSet::new([1.0, 2.0, 2.0], [1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateAbscissa { first: 1, second: 2, value: 2.0 });
}

#[test]
fn duplicate_reports_indices_when_unsorted() {
    let err = SampleSet::new([4.0, 0.5, 3.0, 4.0], [0.0; 4]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateAbscissa { first: 0, second: 3, value }
        if value == 4.0));
}

#[test]
fn near_duplicate_accepted_by_default() -> InterpResult {
    let s = SampleSet::new([0.0, 1e-13, 1.0], [0.0, 1.0, 2.0])?;
    assert_eq!(s.len(), 3);
    Ok(())
}

#[test]
fn near_duplicate_rejected_with_tolerance() {
    let err = SampleSet::with_x_tol([0.0, 1e-13, 1.0], [0.0, 1.0, 2.0], 1e-12).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateAbscissa { first: 0, second: 1, .. }));
}

#[test]
fn invalid_tolerance() {
    let err = SampleSet::with_x_tol([0.0, 1.0], [0.0, 1.0], -1.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { got } if got == -1.0));
    let err = SampleSet::with_x_tol([0.0, 1.0], [0.0, 1.0], f64::NAN).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { .. }));
}

#[test]
fn non_finite_rejected() {
    let err = SampleSet::new([0.0, f64::NAN], [0.0, 1.0]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteX { idx: 1 });
    let err = SampleSet::new([0.0, 1.0], [f64::INFINITY, 1.0]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteY { idx: 0 });
}

#[test]
fn non_finite_names_the_vector() {
    // both vectors bad at different indices: abscissas are checked first
    let err = SampleSet::new([0.0, 1.0, f64::NEG_INFINITY], [f64::NAN, 1.0, 2.0]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteX { idx: 2 });
    assert_eq!(err.to_string(), "non-finite abscissa at index 2");

    let err = SampleSet::new([0.0, 1.0, 2.0], [0.0, 1.0, f64::NAN]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteY { idx: 2 });
    assert_eq!(err.to_string(), "non-finite ordinate at index 2");
}

#[test]
fn empty_set_constructs() -> InterpResult {
    let s = SampleSet::new(Vec::new(), Vec::new())?;
    assert!(s.is_empty());
    assert_eq!(s.x_range(), None);
    Ok(())
}

#[test]
fn error_messages_name_the_problem() {
    let err = SampleSet::new([1.0, 2.0, 2.0], [1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err.to_string(), "duplicate abscissa 2 at indices 1 and 2");
    let err = SampleSet::new([1.0, 2.0, 3.0], [1.0, 2.0]).unwrap_err();
    assert_eq!(err.to_string(), "shape mismatch: x has 3 elements, y has 2");
}
