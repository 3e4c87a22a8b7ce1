//! # LRP Rating
//!
//! Shape-based rating of candidate map lines for location reference
//! decoding.
//!
//! When a compact location reference is resolved against a map, every
//! reference point must be tied to one of several nearby candidate lines.
//! This library scores each candidate by comparing two short coordinate
//! pairs: one projected from the reference point along its bearing, one
//! sampled from the candidate line around the point's projection. The
//! pairs are compared with the discrete Fréchet distance and the distance
//! is inverted into an integer rating; the higher the rating, the better
//! the local shape agreement.
//!
//! ## Features
//!
//! - **`parallel`** - Rate candidate batches in parallel with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use lrp_rating::{
//!     GeoPoint, LocationReferencePoint, Polyline, RatingConfig, rate_candidate,
//! };
//!
//! // A reference point heading due east, projected onto a candidate line
//! // that runs east through it.
//! let reference = LocationReferencePoint::new(5.0, 52.0, 90.0, false);
//! let line = Polyline::new(vec![
//!     GeoPoint::new(5.0, 52.0),
//!     GeoPoint::new(5.002, 52.0),
//! ])
//! .unwrap();
//!
//! let rating = rate_candidate(&RatingConfig::default(), 0.0, &reference, &line, 0.0).unwrap();
//! assert!(rating > 1_000);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{OptionExt, RatingError, Result};

// Discrete Fréchet distance engine
pub mod frechet;
pub use frechet::discrete_frechet_distance;

// Candidate line geometry (trait seam plus the bundled polyline)
pub mod line;
pub use line::{CandidateLine, Polyline};

// Projection of reference point and candidate line onto coordinate pairs
pub mod projection;
pub use projection::{ProjectedPairs, project};

// Candidate rating (Fréchet distance inverted into an integer score)
pub mod rating;
#[cfg(feature = "parallel")]
pub use rating::rate_candidates_parallel;
pub use rating::{
    MAX_RATING, RatingCandidate, rate_candidate, rate_candidates, rating_from_distance,
};

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate in decimal degrees, longitude first.
///
/// # Example
/// ```
/// use lrp_rating::GeoPoint;
/// let point = GeoPoint::new(5.0998, 52.1016); // Utrecht
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    /// Create a new coordinate from decimal degrees.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Check that the coordinate is finite and inside the WGS84 range.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && self.longitude >= -180.0
            && self.longitude <= 180.0
            && self.latitude >= -90.0
            && self.latitude <= 90.0
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

/// One point of a location reference: a coordinate plus the bearing of the
/// reference path at that coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationReferencePoint {
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Bearing of the reference path at this point, in degrees clockwise
    /// from north.
    pub bearing: f64,
    /// Whether this is the last point of its location reference. A last
    /// point's bearing runs against the travel direction of the path, so
    /// its candidate pair samples backward along the line.
    pub is_last: bool,
}

impl LocationReferencePoint {
    /// Create a new location reference point.
    pub fn new(longitude: f64, latitude: f64, bearing: f64, is_last: bool) -> Self {
        Self {
            longitude,
            latitude,
            bearing,
            is_last,
        }
    }

    /// The point's coordinate.
    pub fn coordinate(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}

/// Configuration for candidate rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingConfig {
    /// Distance in meters between the two coordinates of each projected
    /// pair. Both the synthetic reference endpoint and the second line
    /// sample are placed this far from their respective first coordinate.
    /// Default: 20 meters
    pub bearing_distance: u32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            bearing_distance: 20,
        }
    }
}
