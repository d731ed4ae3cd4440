use crate::base::Neighborhood;

/// Holds small point clouds used in tests
///
/// Each function returns the reference positions (flat, 3 per point), the
/// point volumes, and the bond topology; all points are owned and the
/// overlap set has no ghosts.
pub struct SamplePoints {}

impl SamplePoints {
    /// Returns two points a distance d0 apart along x, each the other's only neighbor
    ///
    /// ```text
    /// 0 -------- 1 -> x
    /// 0.0        d0
    /// ```
    pub fn two_points(d0: f64, vol: f64) -> (Vec<f64>, Vec<f64>, Neighborhood) {
        let x = vec![0.0, 0.0, 0.0, /**/ d0, 0.0, 0.0];
        let volume = vec![vol, vol];
        let nbh = Neighborhood::from_interleaved(&[1, 1, /**/ 1, 0], 2, 2).unwrap();
        (x, volume, nbh)
    }

    /// Returns a corner cloud: point 0 bonded to one neighbor along x and one along y
    ///
    /// ```text
    ///  y
    ///  ^
    ///  2
    ///  |
    ///  0----1 -> x     0:[1,2]  1:[0]  2:[0]
    /// (side h; points 1 and 2 are farther than h·√2 apart, hence not bonded)
    /// ```
    pub fn corner_three(h: f64, vol: f64) -> (Vec<f64>, Vec<f64>, Neighborhood) {
        let x = vec![
            0.0, 0.0, 0.0, //
            h, 0.0, 0.0, //
            0.0, h, 0.0,
        ];
        let volume = vec![vol, vol, vol];
        let nbh = Neighborhood::from_interleaved(&[2, 1, 2, /**/ 1, 0, /**/ 1, 0], 3, 3).unwrap();
        (x, volume, nbh)
    }

    /// Returns the eight corners of a cube with side l, bonded all-to-all
    ///
    /// ```text
    ///       4--------------7
    ///      /.             /|
    ///     / .            / |
    ///    5--------------6  |        z
    ///    |  .           |  |        ↑
    ///    |  0...........|..3        o → y
    ///    | .            | /        ↙
    ///    |.             |/        x
    ///    1--------------2
    /// ```
    pub fn cube_eight(l: f64, vol: f64) -> (Vec<f64>, Vec<f64>, Neighborhood) {
        let x = vec![
            0.0, 0.0, 0.0, //
            l, 0.0, 0.0, //
            l, l, 0.0, //
            0.0, l, 0.0, //
            0.0, 0.0, l, //
            l, 0.0, l, //
            l, l, l, //
            0.0, l, l,
        ];
        let volume = vec![vol; 8];
        let mut list = Vec::new();
        for p in 0..8 {
            list.push(7);
            for n in 0..8 {
                if n != p {
                    list.push(n);
                }
            }
        }
        let nbh = Neighborhood::from_interleaved(&list, 8, 8).unwrap();
        (x, volume, nbh)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
