use super::deviatoric_norm::deviatoric_force_state_norm;
use super::linear_elastic::check_force_arrays;
use crate::base::{Neighborhood, OMEGA};
use crate::StrError;
use russell_lab::math::PI;

/// Implements the isotropic elastic-plastic peridynamic solid with radial return
///
/// The deviatoric part of the bond force state obeys a von-Mises-like yield
/// criterion with an incremental (backward-Euler-equivalent) elastic
/// predictor / plastic corrector. Per owned point and time step:
///
/// ```text
/// 1. ‖td_trial‖ from the previous step's plastic extension state
/// 2. ψ = 75 σy² / (8 π δ⁵)         (3-D spherical-horizon yield value)
///    f = ‖td_trial‖² / 2 − ψ
/// 3. f ≤ 0 (elastic):  λₙ₊₁ = λₙ,  edpₙ₊₁ = edpₙ,  td = td_trial
///    f > 0 (plastic):  Δλ = (‖td_trial‖/√(2ψ) − 1) / α
///                      λₙ₊₁ = λₙ + Δλ
///                      td = √(2ψ) td_trial / ‖td_trial‖
///                      edpₙ₊₁ = edpₙ + td Δλ
/// 4. t = (1 − dmg) (ti + (1 − dmg) td),  ti = 3K θ d / m
/// ```
///
/// All bonds of a yielding point share the single multiplier Δλ, while each
/// bond carries its own plastic extension history. The force assembly and
/// its asymmetric volume scaling match [`super::LinearElasticForces`].
pub struct ElasticPlasticForces {
    /// Bulk modulus K
    kk: f64,

    /// Shear modulus μ
    gg: f64,

    /// Horizon δ (interaction radius)
    horizon: f64,

    /// Yield stress σy
    yield_stress: f64,
}

impl ElasticPlasticForces {
    /// Allocates a new instance
    pub fn new(bulk_modulus: f64, shear_modulus: f64, horizon: f64, yield_stress: f64) -> Result<Self, StrError> {
        if bulk_modulus <= 0.0 {
            return Err("bulk modulus must be > 0.0");
        }
        if shear_modulus <= 0.0 {
            return Err("shear modulus must be > 0.0");
        }
        if horizon <= 0.0 {
            return Err("horizon must be > 0.0");
        }
        if yield_stress < 0.0 {
            return Err("yield stress must be ≥ 0.0");
        }
        Ok(ElasticPlasticForces {
            kk: bulk_modulus,
            gg: shear_modulus,
            horizon,
            yield_stress,
        })
    }

    /// Returns the size of the yield surface
    ///
    /// ```text
    /// ψ = 75 σy² / (8 π δ⁵)
    /// ```
    pub fn yield_value(&self) -> f64 {
        75.0 * self.yield_stress * self.yield_stress / (8.0 * PI * self.horizon.powi(5))
    }

    /// Accumulates internal forces and advances the plastic state by one step
    ///
    /// # Input
    ///
    /// * `x`, `y` -- reference and current positions (flat, 3 per point, overlap set)
    /// * `m`, `volume`, `theta` -- per-point scalars (overlap set)
    /// * `bond_damage` -- bond-aligned damage (length `nbh.num_bonds()`)
    /// * `edp_n` -- bond-aligned deviatoric plastic extension state of the
    ///   previous step
    /// * `lambda_n` -- plastic multiplier of the previous step, one value
    ///   per owned record
    ///
    /// # Output
    ///
    /// * `edp_np1`, `lambda_np1` -- next-step plastic state (the caller
    ///   persists these into the "N" buffers of the following step; the bond
    ///   ordering must stay stable across steps)
    /// * `f_internal` -- accumulated forces (caller zero-initializes and
    ///   reduces ghost entries)
    ///
    /// Preconditions not checked here: `m > 0` and current bond length
    /// `dY > 0` for every bond.
    pub fn add_internal_force(
        &self,
        nbh: &Neighborhood,
        x: &[f64],
        y: &[f64],
        m: &[f64],
        volume: &[f64],
        theta: &[f64],
        bond_damage: &[f64],
        edp_n: &[f64],
        edp_np1: &mut [f64],
        lambda_n: &[f64],
        lambda_np1: &mut [f64],
        f_internal: &mut [f64],
    ) -> Result<(), StrError> {
        check_force_arrays(nbh, x, y, m, volume, theta, bond_damage, f_internal)?;
        if edp_n.len() != nbh.num_bonds() || edp_np1.len() != nbh.num_bonds() {
            return Err("plastic extension arrays have incorrect lengths");
        }
        if lambda_n.len() != nbh.num_owned_points() || lambda_np1.len() != nbh.num_owned_points() {
            return Err("plastic multiplier arrays have incorrect lengths");
        }
        let yield_value = self.yield_value();
        for p in 0..nbh.num_owned_points() {
            let xx = [x[3 * p], x[3 * p + 1], x[3 * p + 2]];
            let yy = [y[3 * p], y[3 * p + 1], y[3 * p + 2]];
            let alpha = 15.0 * self.gg / m[p];
            let c = 3.0 * self.kk * theta[p] * OMEGA / m[p];
            let self_volume = volume[p];

            // elastic predictor: norm of the trial deviatoric force state
            let range = nbh.bond_range(p);
            let td_norm = deviatoric_force_state_norm(
                nbh.neighbors(p),
                theta[p],
                &bond_damage[range.clone()],
                &edp_n[range],
                &xx,
                &yy,
                x,
                y,
                volume,
                alpha,
                OMEGA,
            );

            // yield check: plastic flow requires strictly f > 0
            let f = td_norm * td_norm / 2.0 - yield_value;
            let elastic = f <= 0.0;
            let mut delta_lambda = 0.0;
            if elastic {
                lambda_np1[p] = lambda_n[p];
            } else {
                debug_assert!(td_norm > 0.0);
                delta_lambda = (td_norm / (2.0 * yield_value).sqrt() - 1.0) / alpha;
                lambda_np1[p] = lambda_n[p] + delta_lambda;
            }

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

                // deviatoric extension state and trial force
                let ed = d_y - zeta - theta[p] * zeta / 3.0;
                let edp = edp_n[k];
                let td_trial = alpha * OMEGA * (ed - edp);

                // plastic corrector: rescale onto the yield surface
                let td = if elastic {
                    edp_np1[k] = edp;
                    td_trial
                } else {
                    let td = (2.0 * yield_value).sqrt() * td_trial / td_norm;
                    edp_np1[k] = edp + td * delta_lambda;
                    td
                };

                // isotropic part and total force density (with damage)
                let ti = c * zeta;
                let dmg = 1.0 - bond_damage[k];
                let t = dmg * (ti + dmg * td);

                let fx = t * dx / d_y;
                let fy = t * dy / d_y;
                let fz = t * dz / d_y;
                f_internal[3 * p] += fx * cell_volume;
                f_internal[3 * p + 1] += fy * cell_volume;
                f_internal[3 * p + 2] += fz * cell_volume;
                f_internal[3 * n_id] -= fx * self_volume;
                f_internal[3 * n_id + 1] -= fy * self_volume;
                f_internal[3 * n_id + 2] -= fz * self_volume;
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
