//! Candidate line geometry.
//!
//! The rating step reads road geometry through one narrow seam:
//! [`CandidateLine`] maps an along-line distance to a coordinate. Decoders
//! backed by a real map implement the trait on their own line handles;
//! [`Polyline`] is the bundled implementation for in-memory geometry and
//! tests.

use std::cmp::Ordering;

use geo::{Distance, Haversine, Point};

use crate::GeoPoint;

/// Read-only accessor for a candidate line's geometry.
pub trait CandidateLine {
    /// Resolve the coordinate `distance_m` meters along the line.
    ///
    /// The distance is signed and may lie before the start or past the end
    /// of the line; how such offsets resolve (clamping, extrapolation) is
    /// the implementor's contract. Returns `None` when the geometry cannot
    /// produce a coordinate at all, which the rating path classifies as
    /// invalid map data.
    fn coordinate_along_line(&self, distance_m: f64) -> Option<GeoPoint>;
}

/// A candidate line backed by an in-memory coordinate chain.
///
/// Offsets before the start resolve to the first coordinate and offsets
/// past the end to the last; inside the line the coordinate is
/// interpolated linearly within the containing segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<GeoPoint>,
    /// cumulative[i] is the great-circle distance in meters from the start
    /// of the line to points[i]; cumulative[0] is 0.
    cumulative: Vec<f64>,
}

impl Polyline {
    /// Build a polyline from at least two valid coordinates.
    ///
    /// Returns `None` for fewer than two points or any out-of-range
    /// coordinate instead of constructing geometry that would fail lookups
    /// later.
    pub fn new(points: Vec<GeoPoint>) -> Option<Self> {
        if points.len() < 2 || points.iter().any(|p| !p.is_valid()) {
            return None;
        }

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(total);
        for pair in points.windows(2) {
            total += Haversine::distance(Point::from(pair[0]), Point::from(pair[1]));
            cumulative.push(total);
        }

        Some(Self { points, cumulative })
    }

    /// Total length of the line in meters.
    pub fn length_m(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// The line's coordinates in order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}

impl CandidateLine for Polyline {
    fn coordinate_along_line(&self, distance_m: f64) -> Option<GeoPoint> {
        if distance_m <= 0.0 {
            return self.points.first().copied();
        }
        if distance_m >= self.length_m() {
            return self.points.last().copied();
        }

        // Binary search for the segment containing the offset.
        let index = match self
            .cumulative
            .binary_search_by(|d| d.partial_cmp(&distance_m).unwrap_or(Ordering::Equal))
        {
            Ok(i) => return self.points.get(i).copied(),
            Err(i) => i.saturating_sub(1),
        };

        let p1 = self.points.get(index)?;
        let p2 = self.points.get(index + 1)?;
        let segment = self.cumulative[index + 1] - self.cumulative[index];
        if segment <= 0.0 {
            // Duplicate consecutive coordinates produce zero-length segments.
            return Some(*p1);
        }

        let ratio = (distance_m - self.cumulative[index]) / segment;
        Some(GeoPoint::new(
            p1.longitude + ratio * (p2.longitude - p1.longitude),
            p1.latitude + ratio * (p2.latitude - p1.latitude),
        ))
    }
}
