//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed once, when the interpolator is built, and
//! evaluated at query points using Horner’s scheme in O(n) per point.
//! The table is never touched again, so a built [`NewtonInterpolator`]
//! can be shared between threads freely.


use tracing::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::{self, InterpolationReport};
use crate::interpolation::samples::SampleSet;
use crate::interpolation::traits::Interpolator;


/// Newton-form interpolant: an owned [`SampleSet`] plus its 
/// divided-difference table, `coefficients[i] = f[x0, ..., xi]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonInterpolator {
    samples: SampleSet,
    coefficients: Vec<f64>,
}

impl NewtonInterpolator {
    /// Validates `(xs, ys)` and builds the coefficient table.
    ///
    /// # Errors
    /// See [`SampleSet::new`].
    pub fn new(
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
    ) -> Result<Self, InterpolationError> {
        Ok(Self::from_samples(SampleSet::new(xs, ys)?))
    }

    pub fn from_samples(samples: SampleSet) -> Self {
        let coefficients = divided_differences(samples.xs(), samples.ys());
        debug!(
            n = coefficients.len(),
            leading = coefficients.first().copied(),
            "built divided-difference table"
        );
        Self { samples, coefficients }
    }
}

impl Interpolator for NewtonInterpolator {
    /// Horner evaluation in the Newton basis:
    ///
    /// ```text
    /// P(x) = c[0] + (x - x[0]) * [ c[1] + (x - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidSampleSet`] on an empty sample set.
    fn interpolate(&self, x: f64) -> Result<f64, InterpolationError> {
        let n = self.samples.require_points()?;
        let xs = self.samples.xs();
        let c  = &self.coefficients;

        let mut p = c[n - 1];
        for i in (0..n - 1).rev() {
            p = p * (x - xs[i]) + c[i];
        }
        Ok(p)
    }

    fn coefficients(&self) -> &[f64] { &self.coefficients }
    fn samples(&self) -> &SampleSet { &self.samples }
    fn algorithm(&self) -> Algorithm { Algorithm::Newton }
}


/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t. 
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
///
/// `c[0] == y[0]`. Callers pass a validated [`SampleSet`]: equal lengths, 
/// pairwise distinct abscissas.
pub(crate) fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> { 
    debug_assert_eq!(x.len(), y.len());
    let n = x.len(); 

    let mut c = y.to_vec(); 

    // walk i downwards so c[i - 1] still holds the previous order
    for j in 1..n { 
        for i in (j..n).rev() { 
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]); 
        }
    }

    c
}


/// Newton interpolation configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] 
///
/// # Construction 
/// - Use [`NewtonCfg::new`] then optional setters. 
///
/// # Defaults 
/// - Duplicate tolerance between abscissas; 
///   [`crate::interpolation::config::DEFAULT_X_TOL`] (exact) by default. 
#[derive(Debug, Clone, Copy)] 
pub struct NewtonCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - Evaluates every point in `cfg.common.x_eval()` with Horner’s nested 
///   form. Points outside the sample range are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `coefficients`   : the divided-difference table
///
/// # Errors
/// - [`InterpolationError::DuplicateAbscissa`] if `x` repeats a value.
/// - [`InterpolationError::InvalidSampleSet`] if no data was configured 
///   but evaluation points were.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> { 
    let interp = NewtonInterpolator::from_samples(cfg.common.samples()?);
    report::run(&interp, cfg.common.x_eval())
}
