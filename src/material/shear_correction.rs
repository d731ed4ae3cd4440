use crate::base::Neighborhood;
use crate::StrError;
use russell_lab::math::PI;

/// Magnitude of the synthetic shear strain applied by the probe
const GAMMA: f64 = 1e-6;

/// Computes the shear-modulus correction factor of each owned point
///
/// A finite, discrete neighbor set truncates the ideal spherical horizon,
/// so the discrete deviatoric norm under pure shear falls short of the
/// continuum value. The factor returned for each point rescales the shear
/// term accordingly; it depends on reference geometry and volumes only.
///
/// # Output
///
/// * `factor` -- correction factors (overlap-length array; entries of owned
///   points are overwritten, ghost entries are left untouched)
pub fn compute_shear_correction_factor(
    nbh: &Neighborhood,
    x: &[f64],
    volume: &[f64],
    horizon: f64,
    factor: &mut [f64],
) -> Result<(), StrError> {
    let n_over = nbh.num_points_overlap();
    if x.len() != 3 * n_over {
        return Err("reference position array has incorrect length");
    }
    if volume.len() != n_over {
        return Err("volume array has incorrect length");
    }
    if factor.len() != n_over {
        return Err("correction factor array has incorrect length");
    }
    if horizon <= 0.0 {
        return Err("horizon must be > 0.0");
    }
    for p in 0..nbh.num_owned_points() {
        factor[p] = probe_shear_modulus_scale_factor(nbh.neighbors(p), &x[3 * p..3 * p + 3], x, volume, horizon);
    }
    Ok(())
}

/// Probes the shear-modulus scale factor of a single point
///
/// Synthesizes an idealized pure-shear deformation over the point's
/// reference neighbor set (shear component x, amplitude γ = 1e-6, the point
/// itself held fixed), accumulates the resulting deviatoric-extension norm,
/// and returns the ratio of the continuum value to the discrete one:
///
/// ```text
/// reference = 4 π γ² δ⁵ / 75
/// factor    = reference / Σ ed² Vₙ
/// ```
///
/// The neighbor set must realize a nonzero discrete norm (at least one
/// neighbor off the probe's shear plane); an isolated or degenerate point
/// is a precondition violation and produces an infinite factor.
pub fn probe_shear_modulus_scale_factor(
    neighbors: &[usize],
    xx: &[f64],
    x_overlap: &[f64],
    volume: &[f64],
    horizon: f64,
) -> f64 {
    let reference = 4.0 * PI * GAMMA * GAMMA * horizon.powi(5) / 75.0;
    let mut norm = 0.0;
    for &id in neighbors {
        let xp = &x_overlap[3 * id..3 * id + 3];
        let dx = xp[0] - xx[0];
        let dy = xp[1] - xx[1];
        let dz = xp[2] - xx[2];
        let zeta = (dx * dx + dy * dy + dz * dz).sqrt();

        // sheared neighbor position; the probe point does not move
        let dx = (xp[0] + GAMMA * dx) - xx[0];
        let d_y = (dx * dx + dy * dy + dz * dz).sqrt();

        // under pure shear the deviatoric extension is the full stretch
        let ed = d_y - zeta;
        norm += ed * ed * volume[id];
    }
    reference / norm
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
