//! Defines the struct returned by all batch interpolation runs.
//!
//! This report summarizes key metadata about the interpolation process,
//! including the algorithm used, number of data and evaluation points,
//! the interpolant's coefficients, and results of evaluating it.

use tracing::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"newton"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
/// - `coefficients`   : see [`Interpolator::coefficients`]
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
    pub coefficients: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
            coefficients: Vec::new(),
        }
    }
}


/// Evaluates `interp` at every point of `x_eval` and collects a report.
pub(crate) fn run<I: Interpolator>(
    interp: &I,
    x_eval: &[f64],
) -> Result<InterpolationReport, InterpolationError> {
    let algorithm = interp.algorithm();
    let mut report = InterpolationReport::new(algorithm, interp.samples().len(), x_eval.len());

    debug!(%algorithm, n_provided = report.n_provided, n_evaluated = report.n_evaluated, "interpolation run");

    report.evaluated = interp.interpolate_many(x_eval)?;
    report.coefficients = interp.coefficients().to_vec();
    Ok(report)
}
