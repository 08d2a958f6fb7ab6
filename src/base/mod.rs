//! Implements the base structures for material-point evaluations

mod constants;
mod parameters;
mod sample_params;
pub use crate::base::constants::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
