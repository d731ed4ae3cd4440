/// Computes the norm of the trial deviatoric force state of one point
///
/// For each bond:
///
/// ```text
/// ed       = dY − d − θ d / 3          (deviatoric extension state)
/// td_trial = (1 − dmg) α ω (ed − edpN)  (trial deviatoric force)
/// ```
///
/// and the result is the volume-weighted L2 norm `√(Σ td_trial² Vₙ)`.
///
/// # Input
///
/// * `neighbors` -- the point's neighbor ids (see `Neighborhood::neighbors`)
/// * `theta` -- dilatation at the point
/// * `bond_damage` -- the point's bond-aligned damage slice
/// * `edp_n` -- the point's bond-aligned deviatoric plastic extension state
///   from the previous step
/// * `xx`, `yy` -- reference and current coordinates of the point (3 values)
/// * `x_overlap`, `y_overlap` -- reference and current positions of the
///   whole overlap set (flat, 3 per point)
/// * `volume` -- point volumes (overlap set)
/// * `alpha` -- material coefficient α = 15 μ / m
/// * `omega` -- bond influence weight (`base::OMEGA` unless probing)
///
/// # Panics
///
/// Panics if `bond_damage` or `edp_n` are shorter than `neighbors`, or if a
/// neighbor id exceeds the position/volume arrays; callers validate these
/// lengths once per force evaluation.
pub fn deviatoric_force_state_norm(
    neighbors: &[usize],
    theta: f64,
    bond_damage: &[f64],
    edp_n: &[f64],
    xx: &[f64],
    yy: &[f64],
    x_overlap: &[f64],
    y_overlap: &[f64],
    volume: &[f64],
    alpha: f64,
    omega: f64,
) -> f64 {
    let mut norm = 0.0;
    for (k, &id) in neighbors.iter().enumerate() {
        let xp = &x_overlap[3 * id..3 * id + 3];
        let yp = &y_overlap[3 * id..3 * id + 3];
        let dx = xp[0] - xx[0];
        let dy = xp[1] - xx[1];
        let dz = xp[2] - xx[2];
        let zeta = (dx * dx + dy * dy + dz * dz).sqrt();
        let dx = yp[0] - yy[0];
        let dy = yp[1] - yy[1];
        let dz = yp[2] - yy[2];
        let d_y = (dx * dx + dy * dy + dz * dz).sqrt();
        let ed = d_y - zeta - theta * zeta / 3.0;
        let td_trial = (1.0 - bond_damage[k]) * alpha * omega * (ed - edp_n[k]);
        norm += td_trial * td_trial * volume[id];
    }
    norm.sqrt()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
