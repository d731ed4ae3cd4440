use crate::StrError;

/// Advances the current position of all overlap points over one explicit step
///
/// ```text
/// y = x + u + v · dt
/// ```
///
/// # Input
///
/// * `x` -- reference positions (flat, 3 per point, overlap set)
/// * `u` -- displacements (same layout)
/// * `v` -- velocities (same layout)
/// * `dt` -- time step size
///
/// # Output
///
/// * `y` -- current positions, fully overwritten (same layout)
pub fn update_geometry(x: &[f64], u: &[f64], v: &[f64], dt: f64, y: &mut [f64]) -> Result<(), StrError> {
    if u.len() != x.len() || v.len() != x.len() || y.len() != x.len() {
        return Err("position, displacement, and velocity arrays must have the same length");
    }
    for i in 0..x.len() {
        y[i] = x[i] + u[i] + v[i] * dt;
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::update_geometry;
    use russell_lab::approx_eq;

    #[test]
    fn update_geometry_works() {
        let x = [1.0, 2.0, 3.0, -1.0, 0.0, 0.5];
        let u = [0.1, 0.0, -0.1, 0.2, 0.0, 0.0];
        let v = [1.0, -2.0, 0.0, 0.0, 4.0, 1.0];
        let dt = 0.5;
        let mut y = [0.0; 6];
        update_geometry(&x, &u, &v, dt, &mut y).unwrap();
        let correct = [1.6, 1.0, 2.9, -0.8, 2.0, 1.0];
        for i in 0..6 {
            approx_eq(y[i], correct[i], 1e-15);
        }
    }

    #[test]
    fn update_geometry_captures_errors() {
        let x = [0.0; 6];
        let u = [0.0; 3];
        let v = [0.0; 6];
        let mut y = [0.0; 6];
        assert_eq!(
            update_geometry(&x, &u, &v, 0.1, &mut y).err(),
            Some("position, displacement, and velocity arrays must have the same length")
        );
    }
}
