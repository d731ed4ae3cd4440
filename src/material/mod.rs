//! Implements the state-based peridynamic material kernels

mod deviatoric_norm;
mod dilatation;
mod elastic_plastic;
mod geometry;
mod linear_elastic;
mod shear_correction;
mod weighted_volume;
pub use crate::material::deviatoric_norm::*;
pub use crate::material::dilatation::*;
pub use crate::material::elastic_plastic::*;
pub use crate::material::geometry::*;
pub use crate::material::linear_elastic::*;
pub use crate::material::shear_correction::*;
pub use crate::material::weighted_volume::*;
