//! Projection of a reference point and a candidate line onto two
//! comparable coordinate pairs.

use geo::{Destination, Haversine, Point};

use crate::error::{OptionExt, RatingError, Result};
use crate::line::CandidateLine;
use crate::{GeoPoint, LocationReferencePoint};

/// The two coordinate pairs compared by the distance engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPairs {
    /// The reference coordinate, then the synthetic endpoint projected
    /// along the reference bearing.
    pub reference: [GeoPoint; 2],
    /// The line coordinate at the projection offset, then the line
    /// coordinate one bearing distance further along (or back, for a last
    /// reference point).
    pub candidate: [GeoPoint; 2],
}

/// Build the reference and candidate coordinate pairs for one rating.
///
/// The synthetic reference endpoint lies `bearing_distance_m` meters from
/// the reference coordinate along its bearing, measured on the great
/// circle. The candidate pair samples the line at `projection_offset_m`
/// and at that offset shifted by the same distance. For the last point of
/// a location reference the shift runs backward, because a terminal
/// point's bearing points against the travel direction of the path.
///
/// Fails with [`RatingError::InvalidMapData`] when either line sample
/// cannot be resolved or a produced coordinate is out of range.
pub fn project(
    reference: &LocationReferencePoint,
    line: &impl CandidateLine,
    bearing_distance_m: f64,
    projection_offset_m: f64,
) -> Result<ProjectedPairs> {
    let origin = reference.coordinate();
    let synthetic = GeoPoint::from(Haversine::destination(
        Point::from(origin),
        reference.bearing,
        bearing_distance_m,
    ));
    if !synthetic.is_valid() {
        return Err(RatingError::invalid_map_data(format!(
            "bearing projection from ({}, {}) left the coordinate range",
            origin.longitude, origin.latitude
        )));
    }

    let shift = if reference.is_last {
        -bearing_distance_m
    } else {
        bearing_distance_m
    };

    let start = line
        .coordinate_along_line(projection_offset_m)
        .filter(|p| p.is_valid())
        .ok_or_invalid_map_data(format!(
            "no coordinate at {} m along the candidate line",
            projection_offset_m
        ))?;
    let end = line
        .coordinate_along_line(projection_offset_m + shift)
        .filter(|p| p.is_valid())
        .ok_or_invalid_map_data(format!(
            "no coordinate at {} m along the candidate line",
            projection_offset_m + shift
        ))?;

    Ok(ProjectedPairs {
        reference: [origin, synthetic],
        candidate: [start, end],
    })
}
