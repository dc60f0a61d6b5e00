//! Interpolation error types.  
//! 
//! ┌ construction : [`InterpolationError::Shape`], [`InterpolationError::DuplicateAbscissa`]  
//! ├ evaluation   : [`InterpolationError::InvalidSampleSet`]  
//! └ input checks : non-finite values, tolerances, grid bounds  

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("shape mismatch: x has {x_len} elements, y has {y_len}")]
    Shape { x_len: usize, y_len: usize },

    #[error("duplicate abscissa {value} at indices {first} and {second}")]
    DuplicateAbscissa { first: usize, second: usize, value: f64 },

    #[error("invalid sample set: got {got} points, need at least 1 to evaluate")]
    InvalidSampleSet { got: usize },

    #[error("non-finite abscissa at index {idx}")]
    NonFiniteX { idx: usize },

    #[error("non-finite ordinate at index {idx}")]
    NonFiniteY { idx: usize },

    #[error("non-finite evaluation point at index {idx}")]
    NonFiniteEval { idx: usize },

    #[error("invalid x_tol {got} must be finite and >= 0")]
    InvalidXTol { got: f64 },

    #[error("invalid grid bounds [{x_min}, {x_max}] must be finite")]
    InvalidGrid { x_min: f64, x_max: f64 },
}
