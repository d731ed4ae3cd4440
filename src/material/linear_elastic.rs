use super::dilatation::check_owned_ids;
use crate::base::{Neighborhood, OMEGA};
use crate::StrError;

/// Implements the isotropic linear peridynamic solid (dilatation only, no plasticity)
///
/// Per owned point:
///
/// ```text
/// α  = 15 μ / m
/// c1 = ω θ (9K − 15μ) / (3 m)
/// ```
///
/// and per bond the scalar force density splits into an isotropic
/// (volumetric) and a deviatoric (stretch-difference) part:
///
/// ```text
/// t = (1 − dmg) (c1 d + (1 − dmg) ω α (dY − d))
/// ```
///
/// projected onto the unit bond direction in the current configuration. The
/// contribution is added to the point's force scaled by the neighbor's
/// volume and subtracted from the neighbor's force scaled by the point's
/// own volume: each point's force is the integral over the other point's
/// volume, so the two scalings differ when volumes differ.
pub struct LinearElasticForces {
    /// Bulk modulus K
    kk: f64,

    /// Shear modulus μ
    gg: f64,
}

impl LinearElasticForces {
    /// Allocates a new instance
    pub fn new(bulk_modulus: f64, shear_modulus: f64) -> Result<Self, StrError> {
        if bulk_modulus <= 0.0 {
            return Err("bulk modulus must be > 0.0");
        }
        if shear_modulus <= 0.0 {
            return Err("shear modulus must be > 0.0");
        }
        Ok(LinearElasticForces {
            kk: bulk_modulus,
            gg: shear_modulus,
        })
    }

    /// Accumulates internal forces for the contiguous owned range
    ///
    /// The caller zero-initializes `f_internal` (flat, 3 per point, overlap
    /// set) before the first force evaluation of the step and reduces the
    /// ghost entries across partitions afterwards. Preconditions not checked
    /// here: `m > 0` and current bond length `dY > 0` for every bond.
    pub fn add_internal_force(
        &self,
        nbh: &Neighborhood,
        x: &[f64],
        y: &[f64],
        m: &[f64],
        volume: &[f64],
        theta: &[f64],
        bond_damage: &[f64],
        f_internal: &mut [f64],
    ) -> Result<(), StrError> {
        check_force_arrays(nbh, x, y, m, volume, theta, bond_damage, f_internal)?;
        self.assemble(nbh, 0..nbh.num_owned_points(), x, y, m, volume, theta, bond_damage, f_internal);
        Ok(())
    }

    /// Accumulates internal forces for an arbitrary list of owned point ids
    ///
    /// The p-th neighbor record of `nbh` pairs with point id `owned_ids[p]`.
    /// With `owned_ids = [0, 1, 2, ...]` this function produces results
    /// identical to [`LinearElasticForces::add_internal_force`].
    pub fn add_internal_force_for(
        &self,
        nbh: &Neighborhood,
        owned_ids: &[usize],
        x: &[f64],
        y: &[f64],
        m: &[f64],
        volume: &[f64],
        theta: &[f64],
        bond_damage: &[f64],
        f_internal: &mut [f64],
    ) -> Result<(), StrError> {
        check_force_arrays(nbh, x, y, m, volume, theta, bond_damage, f_internal)?;
        check_owned_ids(nbh, owned_ids)?;
        self.assemble(
            nbh,
            owned_ids.iter().copied(),
            x,
            y,
            m,
            volume,
            theta,
            bond_damage,
            f_internal,
        );
        Ok(())
    }

    /// Runs the assembly loop over a sequence of point ids (record order)
    fn assemble<I>(
        &self,
        nbh: &Neighborhood,
        ids: I,
        x: &[f64],
        y: &[f64],
        m: &[f64],
        volume: &[f64],
        theta: &[f64],
        bond_damage: &[f64],
        f_internal: &mut [f64],
    ) where
        I: Iterator<Item = usize>,
    {
        for (p, id) in ids.enumerate() {
            let xx = [x[3 * id], x[3 * id + 1], x[3 * id + 2]];
            let yy = [y[3 * id], y[3 * id + 1], y[3 * id + 2]];
            let alpha = 15.0 * self.gg / m[id];
            let c1 = OMEGA * theta[id] * (9.0 * self.kk - 15.0 * self.gg) / (3.0 * m[id]);
            let self_volume = volume[id];
            for (k, n_id) in nbh.bonds(p) {
                let cell_volume = volume[n_id];
                let dx = x[3 * n_id] - xx[0];
                let dy = x[3 * n_id + 1] - xx[1];
                let dz = x[3 * n_id + 2] - xx[2];
                let zeta = (dx * dx + dy * dy + dz * dz).sqrt();
                let dx = y[3 * n_id] - yy[0];
                let dy = y[3 * n_id + 1] - yy[1];
                let dz = y[3 * n_id + 2] - yy[2];
                let d_y = (dx * dx + dy * dy + dz * dz).sqrt();
                let dmg = 1.0 - bond_damage[k];
                let t = dmg * (c1 * zeta + dmg * OMEGA * alpha * (d_y - zeta));
                let fx = t * dx / d_y;
                let fy = t * dy / d_y;
                let fz = t * dz / d_y;
                f_internal[3 * id] += fx * cell_volume;
                f_internal[3 * id + 1] += fy * cell_volume;
                f_internal[3 * id + 2] += fz * cell_volume;
                f_internal[3 * n_id] -= fx * self_volume;
                f_internal[3 * n_id + 1] -= fy * self_volume;
                f_internal[3 * n_id + 2] -= fz * self_volume;
            }
        }
    }
}

/// Validates the lengths of the arrays shared by the force kernels
pub(crate) fn check_force_arrays(
    nbh: &Neighborhood,
    x: &[f64],
    y: &[f64],
    m: &[f64],
    volume: &[f64],
    theta: &[f64],
    bond_damage: &[f64],
    f_internal: &[f64],
) -> Result<(), StrError> {
    let n_over = nbh.num_points_overlap();
    if x.len() != 3 * n_over || y.len() != 3 * n_over {
        return Err("position arrays have incorrect lengths");
    }
    if m.len() != n_over || volume.len() != n_over || theta.len() != n_over {
        return Err("per-point scalar arrays have incorrect lengths");
    }
    if bond_damage.len() != nbh.num_bonds() {
        return Err("bond damage array has incorrect length");
    }
    if f_internal.len() != 3 * n_over {
        return Err("internal force array has incorrect length");
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
