//! Dense-grid sampling of an interpolant.
//!
//! Produces the data a plotting front end needs: an evenly spaced grid, 
//! the interpolant on that grid, and optionally a reference function on 
//! the same grid. Rendering is left to the caller.
//!
//! [`GridCfg`] — grid fields 
//! - `x_min`      : left end, defaults to the smallest sample abscissa 
//! - `x_max`      : right end, defaults to the largest sample abscissa 
//! - `num_points` : grid size, [`DEFAULT_NUM_POINTS`] by default 

use tracing::debug;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;

pub const DEFAULT_NUM_POINTS: usize = 100;


/// `n` evenly spaced points from `start` to `end`, both included. 
/// `n = 0` gives an empty grid and `n = 1` gives `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = end;
            grid
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCfg {
    x_min: Option<f64>,
    x_max: Option<f64>,
    num_points: usize,
}

impl GridCfg {
    pub fn new() -> Self {
        Self { x_min: None, x_max: None, num_points: DEFAULT_NUM_POINTS }
    }

    pub fn set_x_min(mut self, v: f64) -> Self { self.x_min = Some(v); self }
    pub fn set_x_max(mut self, v: f64) -> Self { self.x_max = Some(v); self }
    pub fn set_num_points(mut self, n: usize) -> Self { self.num_points = n; self }

    pub fn num_points(&self) -> usize { self.num_points }

    /// Resolves the grid for `interp`, filling unset bounds from its samples.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidSampleSet`] if a bound must come from 
    ///   an empty sample set.
    /// - [`InterpolationError::InvalidGrid`] if a bound is not finite.
    pub fn grid<I: Interpolator + ?Sized>(&self, interp: &I) -> Result<Vec<f64>, InterpolationError> {
        let (x_min, x_max) = match (self.x_min, self.x_max) {
            (Some(lo), Some(hi)) => (lo, hi),
            (lo, hi) => {
                let (s_lo, s_hi) = interp
                    .samples()
                    .x_range()
                    .ok_or(InterpolationError::InvalidSampleSet { got: 0 })?;
                (lo.unwrap_or(s_lo), hi.unwrap_or(s_hi))
            }
        };
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(InterpolationError::InvalidGrid { x_min, x_max });
        }
        Ok(linspace(x_min, x_max, self.num_points))
    }
}

impl Default for GridCfg {
    fn default() -> Self {
        Self::new()
    }
}


/// Grid values for one interpolant.
///
/// [`CurveSamples`]
/// - `x`            : grid points 
/// - `interpolated` : interpolant at each grid point 
/// - `reference`    : reference function at each grid point, if one was given 
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSamples {
    pub x: Vec<f64>,
    pub interpolated: Vec<f64>,
    pub reference: Option<Vec<f64>>,
}


/// Samples `interp` (and `reference`, if any) on the grid described by `cfg`.
pub fn sample_curve<I: Interpolator + ?Sized>(
    interp: &I,
    cfg: GridCfg,
    reference: Option<&dyn Fn(f64) -> f64>,
) -> Result<CurveSamples, InterpolationError> {
    let x = cfg.grid(interp)?;
    debug!(algorithm = %interp.algorithm(), n = x.len(), "sampling curve");

    let interpolated = interp.interpolate_many(&x)?;
    let reference = reference.map(|f| x.iter().map(|&xq| f(xq)).collect());

    Ok(CurveSamples { x, interpolated, reference })
}
