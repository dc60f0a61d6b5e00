use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::SampleSet;

/// Shared evaluation contract of every interpolant.
pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn interpolate(&self, x: f64) -> Result<f64, InterpolationError>;

    /// method-specific coefficients
    /// - newton   : divided differences f[x0..xi]
    /// - lagrange : the ordinates weighting each basis polynomial
    fn coefficients(&self) -> &[f64];

    fn samples(&self) -> &SampleSet;

    fn algorithm(&self) -> Algorithm;

    /// evaluates many points
    #[inline]
    fn interpolate_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.interpolate(xq)).collect()
    }
}
