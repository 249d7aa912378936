//! Coordinate value types.

use crate::error::{GeoError, Result};

/// Smallest valid latitude in decimal degrees.
pub const MIN_LAT: f64 = -90.0;
/// Largest valid latitude in decimal degrees.
pub const MAX_LAT: f64 = 90.0;
/// Smallest valid longitude in decimal degrees.
pub const MIN_LNG: f64 = -180.0;
/// Largest valid longitude in decimal degrees.
pub const MAX_LNG: f64 = 180.0;

/// A single latitude/longitude pair in decimal degrees.
///
/// Construct with [`Point::new`] to get range checking. The fields are public
/// so already-validated data can be built directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude, -90 to 90.
    pub lat: f64,
    /// Longitude, -180 to 180.
    pub lng: f64,
}

impl Point {
    /// Create a point, checking that both coordinates are finite and in range.
    ///
    /// # Example
    ///
    /// ```
    /// use geoproc::Point;
    ///
    /// let nyc = Point::new(40.7128, -74.0060).unwrap();
    /// assert_eq!(nyc.lat, 40.7128);
    ///
    /// assert!(Point::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat_in_range(lat) {
            return Err(GeoError::LatitudeOutOfRange { lat });
        }
        if !lng_in_range(lng) {
            return Err(GeoError::LongitudeOutOfRange { lng });
        }
        Ok(Self { lat, lng })
    }
}

/// Whether `lat` is a finite value within [-90, 90].
pub fn lat_in_range(lat: f64) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&lat)
}

/// Whether `lng` is a finite value within [-180, 180].
pub fn lng_in_range(lng: f64) -> bool {
    (MIN_LNG..=MAX_LNG).contains(&lng)
}

/// Axis-aligned bounding box over a set of points.
///
/// No antimeridian handling: `east` is simply the largest longitude and
/// `west` the smallest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Maximum latitude.
    pub north: f64,
    /// Minimum latitude.
    pub south: f64,
    /// Maximum longitude.
    pub east: f64,
    /// Minimum longitude.
    pub west: f64,
}

impl Bounds {
    /// Degenerate bounds covering a single point.
    pub fn from_point(point: Point) -> Self {
        Self {
            north: point.lat,
            south: point.lat,
            east: point.lng,
            west: point.lng,
        }
    }

    /// Grow the bounds so they include `point`.
    pub fn extend(&mut self, point: Point) {
        self.north = self.north.max(point.lat);
        self.south = self.south.min(point.lat);
        self.east = self.east.max(point.lng);
        self.west = self.west.min(point.lng);
    }

    /// Whether `point` lies inside the bounds (edges included).
    pub fn contains(&self, point: Point) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

/// Arithmetic mean of a set of points. Not geodesically corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Mean latitude.
    pub lat: f64,
    /// Mean longitude.
    pub lng: f64,
}

impl From<Centroid> for Point {
    fn from(c: Centroid) -> Self {
        Point { lat: c.lat, lng: c.lng }
    }
}
