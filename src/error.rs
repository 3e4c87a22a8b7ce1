//! Unified error handling for candidate rating.
//!
//! The rating path has exactly one classified failure: the map geometry
//! could not produce a usable coordinate. Lookup failures are wrapped into
//! [`RatingError::InvalidMapData`] at the point where they occur and
//! propagated unchanged to the caller.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RatingError>;

/// Errors produced while rating a candidate line.
#[derive(Error, Debug)]
pub enum RatingError {
    /// The candidate line or a projected coordinate could not be resolved
    /// against the map geometry.
    #[error("invalid map data: {reason}")]
    InvalidMapData { reason: String },
}

impl RatingError {
    /// Build an [`RatingError::InvalidMapData`] from any displayable reason.
    pub fn invalid_map_data(reason: impl Into<String>) -> Self {
        Self::InvalidMapData {
            reason: reason.into(),
        }
    }
}

/// Extension trait for converting geometry lookups into classified errors.
pub trait OptionExt<T> {
    /// Convert `None` into [`RatingError::InvalidMapData`] with the given
    /// reason.
    fn ok_or_invalid_map_data(self, reason: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_invalid_map_data(self, reason: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| RatingError::InvalidMapData {
            reason: reason.into(),
        })
    }
}
