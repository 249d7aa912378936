//! Bounds and centroid computation.

use crate::error::{GeoError, Result};
use crate::point::{Bounds, Centroid, Point};

/// Compute the bounding box and centroid of a list of points.
///
/// Runs a single pass over `points`: the first point seeds the min/max
/// accumulators, and running sums of latitude and longitude give the
/// arithmetic-mean centroid. Values are not rounded.
///
/// The slice is expected to be non-empty; callers that validated input
/// already guarantee this, but the check is repeated here so the function
/// is safe to call on its own.
///
/// # Errors
///
/// Returns [`GeoError::EmptyPoints`] if `points` is empty.
///
/// # Example
///
/// ```
/// use geoproc::{calculate_bounds_and_centroid, Point};
///
/// let points = [
///     Point { lat: 40.7128, lng: -74.0060 },
///     Point { lat: 34.0522, lng: -118.2437 },
/// ];
/// let (bounds, centroid) = calculate_bounds_and_centroid(&points).unwrap();
///
/// assert_eq!(bounds.north, 40.7128);
/// assert_eq!(bounds.west, -118.2437);
/// assert!((centroid.lat - 37.3825).abs() < 1e-9);
/// ```
pub fn calculate_bounds_and_centroid(points: &[Point]) -> Result<(Bounds, Centroid)> {
    tracing::info!(
        points = points.len(),
        "Starting calculation of bounds and centroid"
    );

    let Some((first, rest)) = points.split_first() else {
        tracing::error!("Attempted to calculate with an empty list of points");
        return Err(GeoError::EmptyPoints);
    };

    let mut bounds = Bounds::from_point(*first);
    let mut sum_lat = first.lat;
    let mut sum_lng = first.lng;

    for point in rest {
        bounds.extend(*point);
        sum_lat += point.lat;
        sum_lng += point.lng;
    }

    let n = points.len() as f64;
    let centroid = Centroid {
        lat: sum_lat / n,
        lng: sum_lng / n,
    };

    tracing::info!(?bounds, ?centroid, "Calculation completed");

    Ok((bounds, centroid))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn p(lat: f64, lng: f64) -> Point {
        Point { lat, lng }
    }

    #[test]
    fn test_two_cities() {
        let points = [p(40.7128, -74.0060), p(34.0522, -118.2437)];
        let (bounds, centroid) = calculate_bounds_and_centroid(&points).unwrap();

        assert_eq!(bounds.north, 40.7128);
        assert_eq!(bounds.south, 34.0522);
        assert_eq!(bounds.east, -74.0060);
        assert_eq!(bounds.west, -118.2437);
        assert!((centroid.lat - 37.3825).abs() < EPSILON);
        assert!((centroid.lng - -96.12485).abs() < EPSILON);
    }

    #[test]
    fn test_single_point() {
        let points = [p(12.5, -45.25)];
        let (bounds, centroid) = calculate_bounds_and_centroid(&points).unwrap();

        assert_eq!(bounds, Bounds::from_point(points[0]));
        assert_eq!(centroid.lat, 12.5);
        assert_eq!(centroid.lng, -45.25);
    }

    #[test]
    fn test_empty_points() {
        let result = calculate_bounds_and_centroid(&[]);
        assert_eq!(result, Err(GeoError::EmptyPoints));
    }

    #[test]
    fn test_matches_min_max_mean() {
        let points: Vec<Point> = (0..50)
            .map(|i| {
                let i = i as f64;
                p((i * 7.3) % 180.0 - 90.0, (i * 13.1) % 360.0 - 180.0)
            })
            .collect();

        let (bounds, centroid) = calculate_bounds_and_centroid(&points).unwrap();

        let max_lat = points.iter().map(|p| p.lat).fold(f64::MIN, f64::max);
        let min_lat = points.iter().map(|p| p.lat).fold(f64::MAX, f64::min);
        let max_lng = points.iter().map(|p| p.lng).fold(f64::MIN, f64::max);
        let min_lng = points.iter().map(|p| p.lng).fold(f64::MAX, f64::min);
        let mean_lat = points.iter().map(|p| p.lat).sum::<f64>() / points.len() as f64;
        let mean_lng = points.iter().map(|p| p.lng).sum::<f64>() / points.len() as f64;

        assert_eq!(bounds.north, max_lat);
        assert_eq!(bounds.south, min_lat);
        assert_eq!(bounds.east, max_lng);
        assert_eq!(bounds.west, min_lng);
        assert!((centroid.lat - mean_lat).abs() < EPSILON);
        assert!((centroid.lng - mean_lng).abs() < EPSILON);
    }

    #[test]
    fn test_centroid_inside_bounds() {
        let points = [p(-10.0, 170.0), p(5.0, -170.0), p(60.0, 0.0)];
        let (bounds, centroid) = calculate_bounds_and_centroid(&points).unwrap();
        assert!(bounds.contains(centroid.into()));
    }

    #[test]
    fn test_idempotent() {
        let points = [p(1.0, 2.0), p(3.0, 4.0), p(-5.0, 6.0)];
        let first = calculate_bounds_and_centroid(&points).unwrap();
        let second = calculate_bounds_and_centroid(&points).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_logs_to_injected_subscriber() {
        // The library never installs a subscriber; a scoped one captures events.
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            calculate_bounds_and_centroid(&[p(1.0, 1.0)])
        });
        assert!(result.is_ok());
    }
}
