//! Basic example computing bounds and centroid for a few cities.
//!
//! Run with: cargo run --example basic

use geoproc::{calculate_bounds_and_centroid, GeoError, Point};

fn main() -> Result<(), GeoError> {
    let cities = [
        ("New York", 40.7128, -74.0060),
        ("Los Angeles", 34.0522, -118.2437),
        ("Chicago", 41.8781, -87.6298),
        ("Houston", 29.7604, -95.3698),
    ];

    let points = cities
        .iter()
        .map(|(_, lat, lng)| Point::new(*lat, *lng))
        .collect::<Result<Vec<_>, _>>()?;

    let (bounds, centroid) = calculate_bounds_and_centroid(&points)?;

    println!("Bounds of {} cities:", cities.len());
    println!("{:-<40}", "");
    println!("  north: {:>10.4}", bounds.north);
    println!("  south: {:>10.4}", bounds.south);
    println!("  east:  {:>10.4}", bounds.east);
    println!("  west:  {:>10.4}", bounds.west);
    println!();
    println!("Centroid: {:.5}, {:.5}", centroid.lat, centroid.lng);

    // Out-of-range input is rejected at construction
    match Point::new(91.0, 0.0) {
        Ok(_) => println!("unexpected: accepted lat=91"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
