//! Discrete Fréchet distance over coordinate sequences.
//!
//! The engine is a top-down dynamic program over a per-call memo table.
//! The rating path only ever feeds it two-point sequences, but the
//! recurrence is length-agnostic and stays correct for sequences of any
//! positive length, equal or not.

use log::trace;

use crate::GeoPoint;

/// Marks a memo cell that has not been computed yet. Computed cells hold
/// coordinate distances (or max/min combinations of them), which are never
/// negative, so anything above the sentinel is a cache hit.
const UNCOMPUTED: f64 = -1.0;

/// Compute the discrete Fréchet distance between two coordinate sequences.
///
/// Distances between individual coordinates are Euclidean in raw
/// longitude/latitude space, matching the coordinate convention of the
/// surrounding decoder. The result is `>= 0.0`, with `0.0` meaning the
/// sequences coincide exactly.
///
/// Both sequences must be non-empty; an empty sequence is a caller bug and
/// panics.
///
/// # Example
/// ```
/// use lrp_rating::{GeoPoint, discrete_frechet_distance};
///
/// // Two parallel east-west pairs, one degree of latitude apart.
/// let a = [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0)];
/// let b = [GeoPoint::new(0.0, 1.0), GeoPoint::new(1.0, 1.0)];
///
/// let distance = discrete_frechet_distance(&a, &b);
/// assert!((distance - 1.0).abs() < 1e-12);
/// ```
pub fn discrete_frechet_distance(a: &[GeoPoint], b: &[GeoPoint]) -> f64 {
    assert!(
        !a.is_empty() && !b.is_empty(),
        "coordinate sequences must be non-empty"
    );

    let mut table = FrechetTable {
        memo: vec![vec![UNCOMPUTED; b.len()]; a.len()],
        a,
        b,
    };
    let distance = table.compute(a.len() - 1, b.len() - 1);
    trace!(
        "frechet distance over {}x{} sequences: {}",
        a.len(),
        b.len(),
        distance
    );
    distance
}

/// Memo table for one Fréchet computation. Owned by a single call and
/// discarded afterwards; nothing is shared or reused across calls.
struct FrechetTable<'a> {
    memo: Vec<Vec<f64>>,
    a: &'a [GeoPoint],
    b: &'a [GeoPoint],
}

impl FrechetTable<'_> {
    /// Memoized recurrence:
    ///
    /// ```text
    /// F(0,0)       = d(0,0)
    /// F(i,0)       = max(F(i-1,0), d(i,0))
    /// F(0,j)       = max(F(0,j-1), d(0,j))
    /// F(i,j)       = max(min(F(i-1,j), F(i-1,j-1), F(i,j-1)), d(i,j))
    /// ```
    ///
    /// Indices must lie inside both sequences; anything else violates the
    /// call contract and panics rather than returning a sentinel.
    fn compute(&mut self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.a.len() && j < self.b.len(),
            "memo index ({}, {}) outside {}x{} table",
            i,
            j,
            self.a.len(),
            self.b.len()
        );

        if self.memo[i][j] > UNCOMPUTED {
            return self.memo[i][j];
        }

        let d = euclidean_distance(self.a[i], self.b[j]);
        self.memo[i][j] = match (i, j) {
            (0, 0) => d,
            (_, 0) => max_of(&[self.compute(i - 1, 0), d]),
            (0, _) => max_of(&[self.compute(0, j - 1), d]),
            (_, _) => max_of(&[
                min_of(&[
                    self.compute(i - 1, j),
                    self.compute(i - 1, j - 1),
                    self.compute(i, j - 1),
                ]),
                d,
            ]),
        };

        self.memo[i][j]
    }
}

/// Euclidean distance between two coordinates in degree space.
fn euclidean_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let dx = a.longitude - b.longitude;
    let dy = a.latitude - b.latitude;
    (dx * dx + dy * dy).sqrt()
}

/// Largest of a fixed collection of values. The recurrence never combines
/// more than three at once.
fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest of a fixed collection of values.
fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
