use polyinterp::interpolation::errors::InterpolationError;
use polyinterp::interpolation::newton::{interpolate, NewtonCfg, NewtonInterpolator};
use polyinterp::interpolation::{Interpolator, SampleSet};

use super::common::{approx_eq, assert_vec_close, InterpResult, XS, YS};

#[test]
fn quadratic_global_match() -> InterpResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "newton");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert!(approx_eq(rep.evaluated[0], 0.25));
    assert!(approx_eq(rep.evaluated[1], 2.25));
    Ok(())
}

#[test]
fn coefficient_table() -> InterpResult {
    let interp = NewtonInterpolator::new(XS, YS)?;
    let c = interp.coefficients();

    assert_eq!(c[0], YS[0]);
    // f[x0,x1] = -0.8, f[x0,x1,x2] = 0.35, f[x0..x3] = -109/1020
    assert_vec_close(c, &[1.0, -0.8, 0.35, -109.0 / 1020.0]);

    // f[x1,x2] = -0.1, f[x2,x3] = -7/170, f[x1,x2,x3] = 1/34
    let d3 = (1.0 / 34.0 - 0.35) / 3.0;
    assert!((c[3] - d3).abs() <= 1e-14);
    Ok(())
}

#[test]
fn exact_hits() -> InterpResult {
    let x_for_cfg  = [0.0, 1.0, 2.0, 3.0];
    let y_for_cfg  = [0.0, 1.0, 4.0, 9.0];
    let x_eval     = [0.0, 1.0, 2.0, 3.0];
    let y_expected = [0.0, 1.0, 4.0, 9.0];

    let cfg = NewtonCfg::new()
        .set_x(&x_for_cfg)?
        .set_y(&y_for_cfg)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &y_expected);
    Ok(())
}

#[test]
fn midpoint_value() -> InterpResult {
    let interp = NewtonInterpolator::new(XS, YS)?;
    // 1 - 0.8(1.5) + 0.35(1.5)(0.5) + (109/1020)(0.375)
    let expected = 0.0625 + 0.375 * 109.0 / 1020.0;
    assert!(approx_eq(interp.interpolate(2.5)?, expected));
    assert!(approx_eq(interp.interpolate(2.0)?, 0.2));
    Ok(())
}

#[test]
fn extrapolates_outside_range() -> InterpResult {
    let interp = NewtonInterpolator::new([-1.0, 2.0], [10.0, 40.0])?;
    assert!(approx_eq(interp.interpolate(-2.0)?, 0.0));
    assert!(approx_eq(interp.interpolate(5.0)?, 70.0));
    Ok(())
}

#[test]
fn two_points() -> InterpResult {
    let interp = NewtonInterpolator::new([2.0, 4.0], [5.0, 9.0])?;
    assert!(approx_eq(interp.interpolate(3.0)?, 7.0));
    assert_eq!(interp.coefficients(), &[5.0, 2.0]);
    Ok(())
}

#[test]
fn many_points() -> InterpResult {
    let x_for_cfg      = [0.0, 1.0, 3.0, 6.0, 10.0];
    let y_for_cfg      = [0.0, 2.0, 3.0, 3.0, 8.0];

    let interp = NewtonInterpolator::new(x_for_cfg, y_for_cfg)?;
    let rep = interp.interpolate_many(&x_for_cfg)?;
    assert_vec_close(&rep, &y_for_cfg);
    Ok(())
}

#[test]
fn single_point_is_constant() -> InterpResult {
    let interp = NewtonInterpolator::new([3.0], [7.5])?;
    assert_eq!(interp.coefficients(), &[7.5]);
    assert_eq!(interp.interpolate(42.0)?, 7.5);
    Ok(())
}

#[test]
fn empty_set_fails_on_evaluation() -> InterpResult {
    let interp = NewtonInterpolator::from_samples(SampleSet::new(Vec::new(), Vec::new())?);
    assert!(interp.coefficients().is_empty());
    let err = interp.interpolate(1.0).unwrap_err();
    assert_eq!(err, InterpolationError::InvalidSampleSet { got: 0 });
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> InterpResult {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[])?; 

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    assert_eq!(rep.coefficients, vec![0.0, 1.0]);
    Ok(())
}

#[test]
fn empty_cfg_with_eval_points_fails() {
    let cfg = NewtonCfg::new().set_x_eval(&[0.5]).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidSampleSet { got: 0 }));
}

#[test]
fn unequal_length_error() {
    let x  = [0.0, 1.0, 2.0];
    let y  = [0.0, 1.0];
    let cfg = NewtonCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::Shape { x_len: 3, y_len: 2 }));
}

#[test]
fn near_duplicate_x_with_tolerance() {
    let x = [0.0, 1e-13, 1.0];
    let y = [0.0, 1.0, 2.0];
    let cfg = NewtonCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_tol(1e-12).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateAbscissa { .. }));
}

#[test]
fn invalid_x_tol() {
    let err = NewtonCfg::new().set_x_tol(f64::INFINITY).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { .. }));
}

#[test]
fn shared_across_threads() -> InterpResult {
    let interp = NewtonInterpolator::new(XS, YS)?;
    let expected = interp.interpolate(2.5)?;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| interp.interpolate(2.5)))
            .collect();
        for h in handles {
            let got = h.join().expect("worker panicked");
            assert_eq!(got, Ok(expected));
        }
    });
    Ok(())
}
