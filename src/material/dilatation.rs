use crate::base::{Neighborhood, OMEGA};
use crate::StrError;

/// Computes the dilatation of each owned point (contiguous range variant)
///
/// ```text
/// θ[p] = Σ_n 3 ω (1 − dmg) d e Vₙ / m[p]
///
/// d = ‖Xₙ − Xₚ‖   (reference bond length)
/// e = ‖Yₙ − Yₚ‖ − d   (bond stretch)
/// ```
///
/// Damage linearly attenuates each bond's contribution; a fully broken bond
/// contributes zero. The division by `m[p]` is unguarded: a zero weighted
/// volume is a precondition violation of the neighbor-list builder.
///
/// The p-th neighbor record corresponds to point id p. `theta` entries of
/// owned points are overwritten; ghost entries are left untouched.
pub fn compute_dilatation(
    nbh: &Neighborhood,
    x: &[f64],
    y: &[f64],
    m: &[f64],
    volume: &[f64],
    bond_damage: &[f64],
    theta: &mut [f64],
) -> Result<(), StrError> {
    check_arrays(nbh, x, y, m, volume, bond_damage, theta)?;
    dilatation_loop(nbh, 0..nbh.num_owned_points(), x, y, m, volume, bond_damage, theta);
    Ok(())
}

/// Computes the dilatation for an arbitrary list of owned point ids
///
/// The p-th neighbor record of `nbh` pairs with point id `owned_ids[p]`.
/// With `owned_ids = [0, 1, 2, ...]` this function produces results
/// identical to [`compute_dilatation`].
pub fn compute_dilatation_for(
    nbh: &Neighborhood,
    owned_ids: &[usize],
    x: &[f64],
    y: &[f64],
    m: &[f64],
    volume: &[f64],
    bond_damage: &[f64],
    theta: &mut [f64],
) -> Result<(), StrError> {
    check_arrays(nbh, x, y, m, volume, bond_damage, theta)?;
    check_owned_ids(nbh, owned_ids)?;
    dilatation_loop(nbh, owned_ids.iter().copied(), x, y, m, volume, bond_damage, theta);
    Ok(())
}

/// Validates the lengths of the overlap-indexed and bond-aligned arrays
fn check_arrays(
    nbh: &Neighborhood,
    x: &[f64],
    y: &[f64],
    m: &[f64],
    volume: &[f64],
    bond_damage: &[f64],
    theta: &[f64],
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
    Ok(())
}

/// Validates an arbitrary list of owned point ids
pub(crate) fn check_owned_ids(nbh: &Neighborhood, owned_ids: &[usize]) -> Result<(), StrError> {
    if owned_ids.len() != nbh.num_owned_points() {
        return Err("owned id list has incorrect length");
    }
    if owned_ids.iter().any(|&id| id >= nbh.num_points_overlap()) {
        return Err("owned id is out of bounds");
    }
    Ok(())
}

/// Runs the dilatation loop over a sequence of point ids (record order)
fn dilatation_loop<I>(
    nbh: &Neighborhood,
    ids: I,
    x: &[f64],
    y: &[f64],
    m: &[f64],
    volume: &[f64],
    bond_damage: &[f64],
    theta: &mut [f64],
) where
    I: Iterator<Item = usize>,
{
    for (p, id) in ids.enumerate() {
        let xx = &x[3 * id..3 * id + 3];
        let yy = &y[3 * id..3 * id + 3];
        let mut sum = 0.0;
        for (k, n_id) in nbh.bonds(p) {
            let xp = &x[3 * n_id..3 * n_id + 3];
            let yp = &y[3 * n_id..3 * n_id + 3];
            let dx = xp[0] - xx[0];
            let dy = xp[1] - xx[1];
            let dz = xp[2] - xx[2];
            let d = (dx * dx + dy * dy + dz * dz).sqrt();
            let dx = yp[0] - yy[0];
            let dy = yp[1] - yy[1];
            let dz = yp[2] - yy[2];
            let e = (dx * dx + dy * dy + dz * dz).sqrt() - d;
            sum += 3.0 * OMEGA * (1.0 - bond_damage[k]) * d * e * volume[n_id] / m[id];
        }
        theta[id] = sum;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{compute_dilatation, compute_dilatation_for};
    use crate::base::{Neighborhood, SamplePoints};
    use crate::material::compute_weighted_volume;
    use russell_lab::approx_eq;

    #[test]
    fn two_points_extension_works() {
        let d0 = 2.0;
        let e = 0.01;
        let (x, volume, nbh) = SamplePoints::two_points(d0, 0.5);
        let mut y = x.clone();
        y[3] += e; // stretch the bond along x
        let mut m = vec![0.0; 2];
        compute_weighted_volume(&nbh, &x, &volume, &mut m).unwrap();
        let bond_damage = vec![0.0; 2];
        let mut theta = vec![0.0; 2];
        compute_dilatation(&nbh, &x, &y, &m, &volume, &bond_damage, &mut theta).unwrap();
        // θ = 3 d0 e V / m = 3 e / d0
        approx_eq(theta[0], 3.0 * e / d0, 1e-14);
        approx_eq(theta[1], 3.0 * e / d0, 1e-14);
    }

    #[test]
    fn zero_stretch_gives_zero_theta() {
        let (x, volume, nbh) = SamplePoints::two_points(1.0, 1.0);
        let y = x.clone();
        let m = vec![1.0; 2];
        let bond_damage = vec![0.0; 2];
        let mut theta = vec![-1.0; 2];
        compute_dilatation(&nbh, &x, &y, &m, &volume, &bond_damage, &mut theta).unwrap();
        assert_eq!(theta, &[0.0, 0.0]);
    }

    #[test]
    fn broken_bonds_contribute_zero() {
        let (x, volume, nbh) = SamplePoints::two_points(1.0, 1.0);
        let mut y = x.clone();
        y[3] += 0.3;
        let m = vec![1.0; 2];
        let bond_damage = vec![1.0; 2];
        let mut theta = vec![0.0; 2];
        compute_dilatation(&nbh, &x, &y, &m, &volume, &bond_damage, &mut theta).unwrap();
        assert_eq!(theta, &[0.0, 0.0]);
    }

    #[test]
    fn uniform_expansion_gives_3_eps() {
        // θ of a uniform expansion y = (1+ε)x equals 3ε for any neighbor set
        let eps = 1e-3;
        let (x, volume, nbh) = SamplePoints::cube_eight(1.0, 0.125);
        let y: Vec<f64> = x.iter().map(|&xi| (1.0 + eps) * xi).collect();
        let mut m = vec![0.0; 8];
        compute_weighted_volume(&nbh, &x, &volume, &mut m).unwrap();
        let bond_damage = vec![0.0; nbh.num_bonds()];
        let mut theta = vec![0.0; 8];
        compute_dilatation(&nbh, &x, &y, &m, &volume, &bond_damage, &mut theta).unwrap();
        for p in 0..8 {
            approx_eq(theta[p], 3.0 * eps, 1e-12);
        }
    }

    #[test]
    fn range_and_subset_variants_are_equivalent() {
        let (x, volume, nbh) = SamplePoints::cube_eight(1.0, 0.125);
        let y: Vec<f64> = x.iter().enumerate().map(|(i, &xi)| xi + 1e-3 * (i as f64)).collect();
        let mut m = vec![0.0; 8];
        compute_weighted_volume(&nbh, &x, &volume, &mut m).unwrap();
        let bond_damage = vec![0.0; nbh.num_bonds()];
        let mut theta_a = vec![0.0; 8];
        let mut theta_b = vec![0.0; 8];
        compute_dilatation(&nbh, &x, &y, &m, &volume, &bond_damage, &mut theta_a).unwrap();
        let owned_ids: Vec<usize> = (0..8).collect();
        compute_dilatation_for(&nbh, &owned_ids, &x, &y, &m, &volume, &bond_damage, &mut theta_b).unwrap();
        assert_eq!(theta_a, theta_b);
    }

    #[test]
    fn subset_with_ghosts_works() {
        // chain 0 -- 1 -- 2 with unit spacing; only point 1 is owned
        let x = vec![0.0, 0.0, 0.0, /**/ 1.0, 0.0, 0.0, /**/ 2.0, 0.0, 0.0];
        let mut y = x.clone();
        y[6] += 0.1; // stretch bond (1,2)
        let volume = vec![1.0; 3];
        let nbh = Neighborhood::from_interleaved(&[2, 0, 2], 1, 3).unwrap();
        let m = vec![0.0, 2.0, 0.0];
        let bond_damage = vec![0.0; 2];
        let mut theta = vec![0.0; 3];
        compute_dilatation_for(&nbh, &[1], &x, &y, &m, &volume, &bond_damage, &mut theta).unwrap();
        // only the bond to point 2 stretches: θ = 3·1·0.1·1/2
        approx_eq(theta[1], 0.15, 1e-15);
        assert_eq!(theta[0], 0.0);
        assert_eq!(theta[2], 0.0);
    }

    #[test]
    fn compute_dilatation_captures_errors() {
        let (x, volume, nbh) = SamplePoints::two_points(1.0, 1.0);
        let y = x.clone();
        let m = vec![1.0; 2];
        let bond_damage = vec![0.0; 2];
        let mut theta = vec![0.0; 2];
        assert_eq!(
            compute_dilatation(&nbh, &x[..3], &y, &m, &volume, &bond_damage, &mut theta).err(),
            Some("position arrays have incorrect lengths")
        );
        assert_eq!(
            compute_dilatation(&nbh, &x, &y, &m[..1], &volume, &bond_damage, &mut theta).err(),
            Some("per-point scalar arrays have incorrect lengths")
        );
        assert_eq!(
            compute_dilatation(&nbh, &x, &y, &m, &volume, &bond_damage[..1], &mut theta).err(),
            Some("bond damage array has incorrect length")
        );
        assert_eq!(
            compute_dilatation_for(&nbh, &[0], &x, &y, &m, &volume, &bond_damage, &mut theta).err(),
            Some("owned id list has incorrect length")
        );
        assert_eq!(
            compute_dilatation_for(&nbh, &[0, 9], &x, &y, &m, &volume, &bond_damage, &mut theta).err(),
            Some("owned id is out of bounds")
        );
    }
}
