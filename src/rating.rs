//! Candidate-line rating.
//!
//! One rating compares two short coordinate pairs, one projected from the
//! reference point along its bearing and one sampled from the candidate
//! line, then inverts their discrete Fréchet distance into an integer
//! score. Higher means a closer local shape match.

use log::debug;

use crate::error::Result;
use crate::frechet::discrete_frechet_distance;
use crate::line::CandidateLine;
use crate::projection::project;
use crate::{LocationReferencePoint, RatingConfig};

/// Rating returned when the candidate pair coincides exactly with the
/// reference pair. A zero Fréchet distance has no finite reciprocal, so
/// the rating clamps to the maximum instead.
pub const MAX_RATING: u32 = u32::MAX;

/// Rate how well a candidate line's local shape matches a reference point.
///
/// `distance_to_line_m` is the distance between the reference coordinate
/// and its projection onto the line. It is part of the candidate data the
/// surrounding decoder carries and is reported in the rating diagnostics,
/// but it does not influence this shape-based score. `projection_offset_m`
/// is the along-line offset of that projection.
///
/// Returns the inverted Fréchet distance as an integer rating, or
/// [`RatingError::InvalidMapData`](crate::RatingError::InvalidMapData)
/// when the line cannot resolve the sampled coordinates.
pub fn rate_candidate(
    config: &RatingConfig,
    distance_to_line_m: f64,
    reference: &LocationReferencePoint,
    line: &impl CandidateLine,
    projection_offset_m: f64,
) -> Result<u32> {
    let pairs = project(
        reference,
        line,
        f64::from(config.bearing_distance),
        projection_offset_m,
    )?;

    let frechet = discrete_frechet_distance(&pairs.reference, &pairs.candidate);
    let rating = rating_from_distance(frechet);

    debug!(
        "candidate {} m from the reference point rated {} (frechet {:e})",
        distance_to_line_m, rating, frechet
    );

    Ok(rating)
}

/// Convert a Fréchet distance into an integer rating.
///
/// The rating is the reciprocal of the distance truncated toward zero:
/// near-perfect shape agreement rates high, large mismatches rate toward
/// zero. A distance of exactly zero (identical pairs) clamps to
/// [`MAX_RATING`], as does any reciprocal at or beyond it.
///
/// # Example
/// ```
/// use lrp_rating::rating_from_distance;
///
/// assert_eq!(rating_from_distance(0.25), 4);
/// assert_eq!(rating_from_distance(1.5), 0);
/// ```
pub fn rating_from_distance(frechet_distance: f64) -> u32 {
    if frechet_distance == 0.0 {
        return MAX_RATING;
    }
    let inverse = 1.0 / frechet_distance;
    if inverse >= f64::from(MAX_RATING) {
        MAX_RATING
    } else {
        inverse as u32
    }
}

/// One candidate line with its projection data, ready for rating.
#[derive(Debug, Clone, Copy)]
pub struct RatingCandidate<'a, L> {
    /// The candidate line geometry.
    pub line: &'a L,
    /// Distance in meters between the reference coordinate and its
    /// projection onto the line.
    pub distance_to_line_m: f64,
    /// Along-line offset in meters of that projection.
    pub projection_offset_m: f64,
}

/// Rate every candidate against the same reference point.
///
/// Ratings come back in input order, one per candidate. The first lookup
/// failure aborts the batch; a partially rated candidate set is not
/// meaningful to a decoder choosing between lines.
pub fn rate_candidates<L: CandidateLine>(
    config: &RatingConfig,
    reference: &LocationReferencePoint,
    candidates: &[RatingCandidate<'_, L>],
) -> Result<Vec<u32>> {
    candidates
        .iter()
        .map(|candidate| {
            rate_candidate(
                config,
                candidate.distance_to_line_m,
                reference,
                candidate.line,
                candidate.projection_offset_m,
            )
        })
        .collect()
}

/// Rate every candidate against the same reference point, in parallel.
///
/// Same contract as [`rate_candidates`]. Each rating owns its memo table
/// and shares nothing, so candidates split cleanly across rayon workers.
#[cfg(feature = "parallel")]
pub fn rate_candidates_parallel<L: CandidateLine + Sync>(
    config: &RatingConfig,
    reference: &LocationReferencePoint,
    candidates: &[RatingCandidate<'_, L>],
) -> Result<Vec<u32>> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|candidate| {
            rate_candidate(
                config,
                candidate.distance_to_line_m,
                reference,
                candidate.line,
                candidate.projection_offset_m,
            )
        })
        .collect()
}
