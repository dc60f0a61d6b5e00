//! Error diagnostics for comparing interpolants.
//!
//! - [`fit_mse`]       : mean squared error at the sample points (≈ 0 for an exact fit) 
//! - [`max_deviation`] : largest disagreement between two interpolants 
//! - [`compare`]       : one [`ComparisonReport`] per interpolant against a reference 

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::sampling::GridCfg;
use crate::interpolation::traits::Interpolator;


/// [`ComparisonReport`]
/// - `algorithm_name` : method of the compared interpolant 
/// - `fit_mse`        : [`fit_mse`] of the interpolant 
/// - `max_error`      : largest `|P(x) - f(x)|` over the grid, `0` on an empty grid, 
///                      NaN if the interpolant or the reference yields NaN 
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub algorithm_name: &'static str,
    pub fit_mse: f64,
    pub max_error: f64,
}


/// Mean squared error of `interp` at its own sample points.
///
/// # Errors
/// - [`InterpolationError::InvalidSampleSet`] on an empty sample set.
pub fn fit_mse<I: Interpolator + ?Sized>(interp: &I) -> Result<f64, InterpolationError> {
    let samples = interp.samples();
    let n = samples.len();
    if n == 0 {
        return Err(InterpolationError::InvalidSampleSet { got: 0 });
    }

    let fitted = interp.interpolate_many(samples.xs())?;
    let sse: f64 = fitted
        .iter()
        .zip(samples.ys())
        .map(|(p, y)| (p - y) * (p - y))
        .sum();
    Ok(sse / n as f64)
}


/// Largest `|a(x) - b(x)|` over `xs`, `0` for empty `xs`. NaN if either 
/// interpolant yields NaN anywhere.
pub fn max_deviation<A, B>(a: &A, b: &B, xs: &[f64]) -> Result<f64, InterpolationError>
where
    A: Interpolator + ?Sized,
    B: Interpolator + ?Sized,
{
    let mut worst: f64 = 0.0;
    for &xq in xs {
        worst = nan_max(worst, (a.interpolate(xq)? - b.interpolate(xq)?).abs());
    }
    Ok(worst)
}


/// `f64::max` drops NaN; a diagnostic must not.
#[inline]
fn nan_max(worst: f64, d: f64) -> f64 {
    if d.is_nan() || d > worst { d } else { worst }
}


/// Compares each interpolant with `reference` on the grid from `cfg`. 
/// Each interpolant resolves default grid bounds from its own samples.
pub fn compare<F: Fn(f64) -> f64>(
    interps: &[&dyn Interpolator],
    reference: F,
    cfg: GridCfg,
) -> Result<Vec<ComparisonReport>, InterpolationError> {
    interps
        .iter()
        .map(|&interp| -> Result<ComparisonReport, InterpolationError> {
            let grid = cfg.grid(interp)?;
            let mut max_error: f64 = 0.0;
            for &xq in &grid {
                max_error = nan_max(max_error, (interp.interpolate(xq)? - reference(xq)).abs());
            }
            Ok(ComparisonReport {
                algorithm_name: interp.algorithm().algorithm_name(),
                fit_mse: fit_mse(interp)?,
                max_error,
            })
        })
        .collect()
}
