//! Error types for the geoproc library.

use thiserror::Error;

/// Errors that can occur when building points or computing bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// The calculator was handed an empty point list.
    #[error("The list of points cannot be empty.")]
    EmptyPoints,

    /// Latitude outside [-90, 90] or not a finite number.
    #[error("Latitude out of range: lat={lat} (valid: -90 to 90)")]
    LatitudeOutOfRange { lat: f64 },

    /// Longitude outside [-180, 180] or not a finite number.
    #[error("Longitude out of range: lng={lng} (valid: -180 to 180)")]
    LongitudeOutOfRange { lng: f64 },

    /// A GeoJSON geometry could not be turned into points.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type alias using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeoError::EmptyPoints;
        assert_eq!(err.to_string(), "The list of points cannot be empty.");

        let err = GeoError::LatitudeOutOfRange { lat: 91.0 };
        assert!(err.to_string().contains("91"));

        let err = GeoError::LongitudeOutOfRange { lng: -181.0 };
        assert!(err.to_string().contains("-181"));

        let err = GeoError::InvalidGeometry("position has 1 element".to_string());
        assert!(err.to_string().contains("position has 1 element"));
    }
}
