//! # geoproc - Bounds and Centroid for Geographic Points
//!
//! Computes the axis-aligned bounding box and the arithmetic-mean centroid of
//! a list of latitude/longitude points, and validates raw JSON requests into
//! such lists.
//!
//! ## Quick Start
//!
//! ```
//! use geoproc::{calculate_bounds_and_centroid, Point};
//!
//! let points = vec![
//!     Point::new(40.7128, -74.0060)?,  // New York
//!     Point::new(34.0522, -118.2437)?, // Los Angeles
//! ];
//!
//! let (bounds, centroid) = calculate_bounds_and_centroid(&points)?;
//! assert_eq!(bounds.north, 40.7128);
//! assert_eq!(bounds.west, -118.2437);
//! println!("Centroid: {}, {}", centroid.lat, centroid.lng);
//! # Ok::<(), geoproc::GeoError>(())
//! ```
//!
//! ## Validating Requests
//!
//! [`validate::validate_body`] accepts the raw bytes of a
//! `{"points": [{"lat": .., "lng": ..}]}` document and reports every invalid
//! field at once:
//!
//! ```
//! use geoproc::validate::validate_body;
//!
//! let errors = validate_body(br#"{"points": [{"lat": 91.0, "lng": -181.0}]}"#).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```
//!
//! ## Notes
//!
//! - The centroid is a plain mean, not a geodesic centroid.
//! - Bounds do not wrap around the antimeridian; `east` is the largest
//!   longitude and `west` the smallest.
//! - The library logs through `tracing` but never installs a subscriber.

pub mod calculate;
pub mod error;
pub mod point;
pub mod validate;

#[cfg(feature = "geojson")]
pub mod geojson;

// Re-export main types at crate root for convenience
pub use calculate::calculate_bounds_and_centroid;
pub use error::{GeoError, Result};
pub use point::{Bounds, Centroid, Point};
pub use validate::{FieldError, ValidationErrors};
