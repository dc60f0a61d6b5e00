//! Algorithm dispatch. 
//!
//! [`Interpolant`] holds either variant behind one type, for callers that 
//! pick the method at runtime (e.g. from an [`Algorithm`] value).

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::lagrange::LagrangeInterpolator;
use crate::interpolation::newton::NewtonInterpolator;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::traits::Interpolator;


#[derive(Debug, Clone, PartialEq)]
pub enum Interpolant {
    Lagrange(LagrangeInterpolator),
    Newton(NewtonInterpolator),
}

impl Interpolant {
    /// Builds the interpolant for `algorithm`. Newton computes its 
    /// coefficient table here.
    pub fn build(algorithm: Algorithm, samples: SampleSet) -> Self {
        match algorithm {
            Algorithm::Lagrange => Interpolant::Lagrange(LagrangeInterpolator::from_samples(samples)),
            Algorithm::Newton   => Interpolant::Newton(NewtonInterpolator::from_samples(samples)),
        }
    }

    /// Validates `(xs, ys)` then [`Interpolant::build`]s.
    pub fn new(
        algorithm: Algorithm,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
    ) -> Result<Self, InterpolationError> {
        Ok(Self::build(algorithm, SampleSet::new(xs, ys)?))
    }

    fn inner(&self) -> &dyn Interpolator {
        match self {
            Interpolant::Lagrange(i) => i,
            Interpolant::Newton(i)   => i,
        }
    }
}

impl Interpolator for Interpolant {
    fn interpolate(&self, x: f64) -> Result<f64, InterpolationError> {
        self.inner().interpolate(x)
    }
    fn interpolate_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        self.inner().interpolate_many(xs)
    }
    fn coefficients(&self) -> &[f64] { self.inner().coefficients() }
    fn samples(&self) -> &SampleSet { self.inner().samples() }
    fn algorithm(&self) -> Algorithm { self.inner().algorithm() }
}

impl From<LagrangeInterpolator> for Interpolant {
    fn from(i: LagrangeInterpolator) -> Self { Interpolant::Lagrange(i) }
}
impl From<NewtonInterpolator> for Interpolant {
    fn from(i: NewtonInterpolator) -> Self { Interpolant::Newton(i) }
}
