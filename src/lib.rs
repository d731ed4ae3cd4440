//! Perimat implements state-based peridynamic material kernels
//!
//! The crate computes per-bond and per-point mechanical quantities for a
//! meshfree, non-local continuum model: each material point interacts with
//! a finite set of neighboring points ("bonds") within a fixed interaction
//! radius (the horizon), and forces and derived scalars are obtained by
//! summing contributions over those bonds.
//!
//! The main functionality is:
//!
//! * [`material::update_geometry`] -- advances current positions over one explicit step
//! * [`material::compute_weighted_volume`] -- weighted volume `m` of each owned point
//! * [`material::compute_dilatation`] -- isotropic volumetric strain measure `θ`
//! * [`material::deviatoric_force_state_norm`] -- norm of the trial deviatoric force state
//! * [`material::LinearElasticForces`] -- isotropic linear peridynamic solid
//! * [`material::ElasticPlasticForces`] -- isotropic elastic-plastic solid with radial return
//! * [`material::compute_shear_correction_factor`] -- discrete shear-modulus correction
//!
//! Neighbor lists, partitioning/ghost exchange, damage evolution, and time
//! integration belong to external collaborators; this crate only consumes
//! their arrays (see [`base::Neighborhood`]).

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
