//! GeoJSON input and output.
//!
//! Extracts [`Point`]s from GeoJSON geometries, features and feature
//! collections, and renders computed bounds back out as GeoJSON.
//! Enable the `geojson` feature to use this module.
//!
//! GeoJSON positions are `[longitude, latitude]`, the reverse of the
//! `lat`/`lng` order used elsewhere in this crate.
//!
//! # Example
//!
//! ```ignore
//! use geoproc::geojson::points_from_geometry;
//! use geoproc::calculate_bounds_and_centroid;
//! use geojson::Geometry;
//!
//! let line: Geometry = r#"{
//!     "type": "LineString",
//!     "coordinates": [[-74.0060, 40.7128], [-118.2437, 34.0522]]
//! }"#.parse().unwrap();
//!
//! let points = points_from_geometry(&line)?;
//! let (bounds, centroid) = calculate_bounds_and_centroid(&points)?;
//! ```

use geojson::{Feature, GeoJson, Geometry, JsonObject, Value as GeoJsonValue};

use crate::error::{GeoError, Result};
use crate::point::{Bounds, Centroid, Point};

/// Collect every position of a geometry as a [`Point`].
///
/// Supported geometry types:
/// - Point
/// - MultiPoint
/// - LineString
/// - MultiLineString
/// - Polygon
/// - MultiPolygon
/// - GeometryCollection
///
/// Polygon rings are closed, so their first position appears twice in the
/// output. This shifts the centroid towards that vertex.
///
/// # Errors
///
/// Returns an error if:
/// - A position has fewer than 2 elements
/// - A coordinate is out of range
pub fn points_from_geometry(geometry: &Geometry) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    collect_geometry(geometry, &mut points)?;
    Ok(points)
}

/// Collect every position of any GeoJSON object as a [`Point`].
///
/// Features without a geometry contribute nothing.
pub fn points_from_geojson(geojson: &GeoJson) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    match geojson {
        GeoJson::Geometry(geometry) => collect_geometry(geometry, &mut points)?,
        GeoJson::Feature(feature) => collect_feature(feature, &mut points)?,
        GeoJson::FeatureCollection(collection) => {
            for feature in &collection.features {
                collect_feature(feature, &mut points)?;
            }
        }
    }
    Ok(points)
}

fn collect_feature(feature: &Feature, points: &mut Vec<Point>) -> Result<()> {
    match &feature.geometry {
        Some(geometry) => collect_geometry(geometry, points),
        None => Ok(()),
    }
}

fn collect_geometry(geometry: &Geometry, points: &mut Vec<Point>) -> Result<()> {
    match &geometry.value {
        GeoJsonValue::Point(position) => points.push(position_to_point(position)?),
        GeoJsonValue::MultiPoint(positions) | GeoJsonValue::LineString(positions) => {
            collect_positions(positions, points)?
        }
        GeoJsonValue::MultiLineString(lines) | GeoJsonValue::Polygon(lines) => {
            for line in lines {
                collect_positions(line, points)?;
            }
        }
        GeoJsonValue::MultiPolygon(polygons) => {
            for ring in polygons.iter().flatten() {
                collect_positions(ring, points)?;
            }
        }
        GeoJsonValue::GeometryCollection(geometries) => {
            for g in geometries {
                collect_geometry(g, points)?;
            }
        }
    }
    Ok(())
}

fn collect_positions(positions: &[Vec<f64>], points: &mut Vec<Point>) -> Result<()> {
    for position in positions {
        points.push(position_to_point(position)?);
    }
    Ok(())
}

/// Convert a GeoJSON position `[lng, lat, ...]` into a range-checked [`Point`].
///
/// Any altitude element is ignored.
pub fn position_to_point(position: &[f64]) -> Result<Point> {
    match position {
        [lng, lat, ..] => Point::new(*lat, *lng),
        _ => Err(GeoError::InvalidGeometry(
            "Position must have at least 2 elements (lng, lat)".to_string(),
        )),
    }
}

/// The bounds as a closed, counter-clockwise GeoJSON Polygon.
pub fn bounds_to_polygon(bounds: &Bounds) -> Geometry {
    let ring = vec![
        vec![bounds.west, bounds.south],
        vec![bounds.east, bounds.south],
        vec![bounds.east, bounds.north],
        vec![bounds.west, bounds.north],
        vec![bounds.west, bounds.south],
    ];
    Geometry::new(GeoJsonValue::Polygon(vec![ring]))
}

/// A Feature whose geometry is the bounds polygon, with the centroid and
/// the four bounds edges as properties.
pub fn summary_feature(bounds: &Bounds, centroid: &Centroid) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(
        "centroid".to_string(),
        serde_json::json!({ "lat": centroid.lat, "lng": centroid.lng }),
    );
    properties.insert(
        "bounds".to_string(),
        serde_json::json!({
            "north": bounds.north,
            "south": bounds.south,
            "east": bounds.east,
            "west": bounds.west,
        }),
    );

    Feature {
        bbox: Some(vec![bounds.west, bounds.south, bounds.east, bounds.north]),
        geometry: Some(bounds_to_polygon(bounds)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
