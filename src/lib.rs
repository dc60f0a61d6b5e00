//! Polynomial interpolation of scattered samples in Lagrange and 
//! Newton divided-difference form.
pub mod interpolation;
