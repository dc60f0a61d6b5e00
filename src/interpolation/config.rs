//! Shared configuration for interpolation algorithms.  
//! 
//! Provides [`CommonCfg`] with the default duplicate tolerance between 
//! abscissas; [`DEFAULT_X_TOL`]. Shared by all interpolation algorithms. 
//!
//! [`CommonCfg`] — universal fields  
//! - `x`      : x values provided 
//! - `y`      : y values provided 
//! - `x_eval` : x values to evaluate 
//! - `x_tol`  : abscissas closer than this are duplicates 
//!
//! [`CommonCfg::new`] initializes configuration with empty slices. 
//! [`CommonCfg::samples`] turns the configured data into a [`SampleSet`].


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::SampleSet;

/// Exact equality.
pub const DEFAULT_X_TOL: f64 = 0.0; 


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],       
    pub(crate) x_tol  : f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_tol  : DEFAULT_X_TOL, 
        }
    }

    /// Validates the configured `(x, y)` into an owned [`SampleSet`].
    pub fn samples(&self) -> Result<SampleSet, InterpolationError> {
        SampleSet::with_x_tol(self.x, self.y, self.x_tol)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_tol(&self)  -> f64 { self.x_tol }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_tol(&mut self, v: f64) { self.x_tol = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteX { idx });
                }

                // length agreement check 
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::Shape { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteY { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::Shape { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteEval { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v < 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_tol(v);
                Ok(self)
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }

        impl<'a> Default for $cfg {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
pub(crate) use impl_common_cfg;
