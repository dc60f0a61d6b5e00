//! Defines the interpolation algorithm variants 
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods. 

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]    Lagrange basis form, no precomputation 
/// - [`Algorithm::Newton`]      Newton divided-difference form 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Lagrange,
    Newton, 
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange => "lagrange",
            Algorithm::Newton   => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
