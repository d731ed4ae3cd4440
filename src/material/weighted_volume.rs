use crate::base::Neighborhood;
use crate::StrError;

/// Computes the weighted volume of each owned point
///
/// ```text
/// m[p] = Σ_n ‖Xₙ − Xₚ‖² · Vₙ
/// ```
///
/// The sum runs over the undamaged reference bond set; damage never enters
/// the weighted volume. Every state-based force law divides by `m`, so the
/// neighbor-list builder must guarantee that each owned point used by those
/// laws has at least one neighbor with nonzero volume.
///
/// # Input
///
/// * `x` -- reference positions (flat, 3 per point, overlap set)
/// * `volume` -- point volumes (overlap set)
///
/// # Output
///
/// * `m` -- weighted volumes (overlap-length array; entries of owned points
///   are overwritten, ghost entries are left untouched)
pub fn compute_weighted_volume(
    nbh: &Neighborhood,
    x: &[f64],
    volume: &[f64],
    m: &mut [f64],
) -> Result<(), StrError> {
    let n_over = nbh.num_points_overlap();
    if x.len() != 3 * n_over {
        return Err("reference position array has incorrect length");
    }
    if volume.len() != n_over {
        return Err("volume array has incorrect length");
    }
    if m.len() != n_over {
        return Err("weighted volume array has incorrect length");
    }
    for p in 0..nbh.num_owned_points() {
        let xx = &x[3 * p..3 * p + 3];
        let mut sum = 0.0;
        for (_, id) in nbh.bonds(p) {
            let xp = &x[3 * id..3 * id + 3];
            let dx = xp[0] - xx[0];
            let dy = xp[1] - xx[1];
            let dz = xp[2] - xx[2];
            sum += (dx * dx + dy * dy + dz * dz) * volume[id];
        }
        m[p] = sum;
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
