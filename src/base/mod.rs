//! Implements the base structures shared by the material kernels

mod constants;
mod neighborhood;
mod parameters;
mod sample_points;
pub use crate::base::constants::*;
pub use crate::base::neighborhood::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_points::*;
