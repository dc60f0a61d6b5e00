pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod report; 
pub mod samples;
pub mod traits;
pub use samples::SampleSet;
pub use traits::Interpolator;

pub mod lagrange; 
pub mod newton; 
pub mod polynomial;
pub use polynomial::Interpolant;

pub mod comparison;
pub mod sampling;
