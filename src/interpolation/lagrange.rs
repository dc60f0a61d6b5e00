//! Lagrange Interpolation 
//!
//! Implements global polynomial interpolation in 
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial). 
//!
//! Nothing is precomputed. Every evaluation rebuilds each basis value 
//!
//! ```text
//! L_i(x) = prod_{j != i} (x - x[j]) / (x[i] - x[j])
//! ```
//!
//! and accumulates `y[i] * L_i(x)`, so a single point costs O(n²). 


use crate::interpolation::algorithms::Algorithm; 
use crate::interpolation::config::{impl_common_cfg, CommonCfg}; 
use crate::interpolation::errors::InterpolationError; 
use crate::interpolation::report::{self, InterpolationReport}; 
use crate::interpolation::samples::SampleSet; 
use crate::interpolation::traits::Interpolator; 


/// Lagrange-form interpolant over an owned [`SampleSet`]. 
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangeInterpolator {
    samples: SampleSet,
}

impl LagrangeInterpolator {
    /// Validates `(xs, ys)` and wraps them. 
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
        Self { samples }
    }
}

impl Interpolator for LagrangeInterpolator {
    /// # Errors
    /// - [`InterpolationError::InvalidSampleSet`] on an empty sample set.
    fn interpolate(&self, x: f64) -> Result<f64, InterpolationError> {
        self.samples.require_points()?;

        let xs = self.samples.xs();
        let ys = self.samples.ys();

        let mut result = 0.0;
        for (i, &yi) in ys.iter().enumerate() {
            result += yi * basis(xs, i, x);
        }
        Ok(result)
    }

    fn coefficients(&self) -> &[f64] { self.samples.ys() }
    fn samples(&self) -> &SampleSet { &self.samples }
    fn algorithm(&self) -> Algorithm { Algorithm::Lagrange }
}


/// `L_i(x)`. At `x == x[k]` every factor is exactly 1 for `i == k` 
/// and one factor is exactly 0 otherwise, so sample points are reproduced. 
#[inline]
fn basis(xs: &[f64], i: usize, x: f64) -> f64 {
    let xi = xs[i];
    xs.iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(1.0, |acc, (_, &xj)| acc * ((x - xj) / (xi - xj)))
}


/// Lagrange interpolation configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`]
///
/// # Construction 
/// - Use [`LagrangeCfg::new`] then optional setters. 
///
/// # Defaults 
/// - Duplicate tolerance between abscissas; 
///   [`crate::interpolation::config::DEFAULT_X_TOL`] (exact) by default. 
#[derive(Debug, Clone, Copy)] 
pub struct LagrangeCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Performs Lagrange interpolation over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated y-values
/// - `coefficients`   : the ordinates `y`
///
/// # Errors
/// - [`InterpolationError::DuplicateAbscissa`] if `x` repeats a value.
/// - [`InterpolationError::InvalidSampleSet`] if no data was configured 
///   but evaluation points were.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> { 
    let interp = LagrangeInterpolator::from_samples(cfg.common.samples()?);
    report::run(&interp, cfg.common.x_eval())
}
