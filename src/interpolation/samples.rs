//! Validated sample points shared by all interpolators.
//!
//! A [`SampleSet`] pairs abscissas `xs` with ordinates `ys` positionally. 
//! It is checked once at construction and is immutable afterwards. 
//!
//! Checks, in order 
//! ├ `len(xs) == len(ys)`                 else [`InterpolationError::Shape`] 
//! ├ every value finite                   else [`InterpolationError::NonFiniteX`] / [`InterpolationError::NonFiniteY`] 
//! └ abscissas pairwise distinct          else [`InterpolationError::DuplicateAbscissa`] 
//!
//! Distinctness is exact equality unless a tolerance is given through 
//! [`SampleSet::with_x_tol`]. Abscissas need not be sorted.

use tracing::debug;

use crate::interpolation::config::{non_finite_idx, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSet {
    /// Validates `xs`, `ys` with exact-equality duplicate detection.
    pub fn new(
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
    ) -> Result<Self, InterpolationError> {
        Self::with_x_tol(xs, ys, DEFAULT_X_TOL)
    }

    /// Validates `xs`, `ys`, treating two abscissas as duplicates when 
    /// `|a - b| <= x_tol`. `x_tol = 0.0` is exact equality.
    pub fn with_x_tol(
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
        x_tol: f64,
    ) -> Result<Self, InterpolationError> {
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(InterpolationError::InvalidXTol { got: x_tol });
        }

        let xs = xs.into();
        let ys = ys.into();

        if xs.len() != ys.len() {
            return Err(InterpolationError::Shape { x_len: xs.len(), y_len: ys.len() });
        }
        if let Some(idx) = non_finite_idx(&xs) {
            return Err(InterpolationError::NonFiniteX { idx });
        }
        if let Some(idx) = non_finite_idx(&ys) {
            return Err(InterpolationError::NonFiniteY { idx });
        }
        if let Some((first, second)) = find_duplicate(&xs, x_tol) {
            return Err(InterpolationError::DuplicateAbscissa {
                first,
                second,
                value: xs[first],
            });
        }

        debug!(n = xs.len(), x_tol, "validated sample set");
        Ok(Self { xs, ys })
    }

    // getters
    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    /// Smallest and largest abscissa, `None` for an empty set.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = *self.xs.first()?;
        Some(self.xs.iter().fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))))
    }

    /// Number of points, or [`InterpolationError::InvalidSampleSet`] 
    /// when there is nothing to evaluate.
    pub(crate) fn require_points(&self) -> Result<usize, InterpolationError> {
        match self.xs.len() {
            0 => Err(InterpolationError::InvalidSampleSet { got: 0 }),
            n => Ok(n),
        }
    }
}


/// Finds a pair of abscissas closer than `x_tol` (equal when `x_tol == 0`).
///
/// Sorts an index permutation so only neighbours need comparing. Returns 
/// `(first, second)` with `first < second`. With `x_tol == 0` this is the 
/// pair whose later index is smallest; with a tolerance it is some pair 
/// within `x_tol`, not necessarily that one. Assumes all values are finite.
fn find_duplicate(xs: &[f64], x_tol: f64) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..xs.len()).collect();
    order.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]).then(a.cmp(&b)));

    order
        .windows(2)
        .filter(|w| (xs[w[1]] - xs[w[0]]).abs() <= x_tol)
        .map(|w| (w[0].min(w[1]), w[0].max(w[1])))
        .min_by_key(|&(_, second)| second)
}
