//! Makes available common structures needed to evaluate the material kernels
//!
//! You may write `use perimat::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Neighborhood, ParamForceState, SamplePoints, OMEGA};
pub use crate::material::{
    compute_dilatation, compute_dilatation_for, compute_shear_correction_factor, compute_weighted_volume,
    deviatoric_force_state_norm, probe_shear_modulus_scale_factor, update_geometry, ElasticPlasticForces,
    LinearElasticForces,
};
pub use crate::StrError;
