use crate::StrError;
use std::ops::Range;

/// Holds the ragged bond topology of the owned points over the overlap set
///
/// The overlap set is the union of the points owned by the current partition
/// and the ghost points referenced as neighbors. All per-point arrays handled
/// by the kernels span this index space; bond-aligned arrays (bond damage,
/// plastic extension state) span the bonds in the exact traversal order of
/// this structure (point-major, then neighbor-minor).
///
/// The external neighbor-list builder produces a flattened buffer
///
/// ```text
/// list = [n₀, id₀₀, ..., id₀ₙ₋₁,  n₁, id₁₀, ..., ...]
/// ```
///
/// which [`Neighborhood::from_interleaved`] parses into an offsets array plus
/// a flat neighbor buffer. [`Neighborhood::bonds`] yields the flat bond index
/// together with the neighbor id so that the bond-aligned arrays can never
/// desynchronize from the neighbor traversal.
pub struct Neighborhood {
    /// Number of points in the overlap set (owned plus ghost)
    num_points_overlap: usize,

    /// Offsets into the flat neighbor buffer (length = num_owned_points + 1)
    bond_offsets: Vec<usize>,

    /// Flat neighbor ids in traversal order (length = total number of bonds)
    neighbors: Vec<usize>,
}

impl Neighborhood {
    /// Parses the flattened (count, ids...) buffer of the neighbor-list builder
    ///
    /// # Input
    ///
    /// * `list` -- the interleaved buffer; its total length must equal
    ///   `num_owned_points` plus the sum of all neighbor counts
    /// * `num_owned_points` -- number of per-point records in `list`
    /// * `num_points_overlap` -- size of the overlap index space; every
    ///   neighbor id must be smaller than this value
    pub fn from_interleaved(
        list: &[usize],
        num_owned_points: usize,
        num_points_overlap: usize,
    ) -> Result<Self, StrError> {
        let mut bond_offsets = Vec::with_capacity(num_owned_points + 1);
        let mut neighbors = Vec::with_capacity(list.len().saturating_sub(num_owned_points));
        bond_offsets.push(0);
        let mut i = 0;
        for _ in 0..num_owned_points {
            if i >= list.len() {
                return Err("neighbor list is truncated");
            }
            let num_neigh = list[i];
            i += 1;
            if i + num_neigh > list.len() {
                return Err("neighbor list is truncated");
            }
            for &id in &list[i..i + num_neigh] {
                if id >= num_points_overlap {
                    return Err("neighbor id is out of bounds");
                }
                neighbors.push(id);
            }
            i += num_neigh;
            bond_offsets.push(neighbors.len());
        }
        if i != list.len() {
            return Err("neighbor list has trailing entries");
        }
        Ok(Neighborhood {
            num_points_overlap,
            bond_offsets,
            neighbors,
        })
    }

    /// Returns the number of owned points (per-point records)
    pub fn num_owned_points(&self) -> usize {
        self.bond_offsets.len() - 1
    }

    /// Returns the size of the overlap index space
    pub fn num_points_overlap(&self) -> usize {
        self.num_points_overlap
    }

    /// Returns the total number of bonds (length of the bond-aligned arrays)
    pub fn num_bonds(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the number of neighbors of the p-th record
    pub fn num_neighbors(&self, p: usize) -> usize {
        self.bond_offsets[p + 1] - self.bond_offsets[p]
    }

    /// Returns the neighbor ids of the p-th record
    pub fn neighbors(&self, p: usize) -> &[usize] {
        &self.neighbors[self.bond_range(p)]
    }

    /// Returns the range of flat bond indices of the p-th record
    ///
    /// Use this range to slice the bond-aligned arrays (damage, plastic state).
    pub fn bond_range(&self, p: usize) -> Range<usize> {
        self.bond_offsets[p]..self.bond_offsets[p + 1]
    }

    /// Returns an iterator over (bond_index, neighbor_id) pairs of the p-th record
    ///
    /// The bond index addresses the bond-aligned arrays; pairing it with the
    /// neighbor id keeps the two traversals in lockstep.
    pub fn bonds(&self, p: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let lo = self.bond_offsets[p];
        let hi = self.bond_offsets[p + 1];
        (lo..hi).zip(self.neighbors[lo..hi].iter().copied())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
