use anyhow::{bail, Context, Result};
use geoproc::{calculate_bounds_and_centroid, Bounds, Centroid, Point};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    GeoJson,
}

#[derive(Serialize)]
struct CentroidOutput {
    lat: f64,
    lng: f64,
}

#[derive(Serialize)]
struct BoundsOutput {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

/// Same shape as the HTTP service's success body.
#[derive(Serialize)]
struct ProcessOutput {
    centroid: CentroidOutput,
    bounds: BoundsOutput,
}

pub fn run(
    input: Option<PathBuf>,
    mut points: Vec<Point>,
    lat_col: &str,
    lng_col: &str,
    format: OutputFormat,
) -> Result<()> {
    if input.is_none() && points.is_empty() {
        bail!("No points given. Use --point LAT,LNG or pass a CSV/GeoJSON file");
    }

    if let Some(path) = input {
        points.extend(read_points(&path, lat_col, lng_col)?);
    }

    let (bounds, centroid) = calculate_bounds_and_centroid(&points)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&to_output(&bounds, &centroid))?);
        }
        OutputFormat::GeoJson => {
            let feature = geoproc::geojson::summary_feature(&bounds, &centroid);
            println!("{}", serde_json::to_string_pretty(&feature)?);
        }
        OutputFormat::Text => print_text(points.len(), &bounds, &centroid),
    }

    Ok(())
}

/// Parse a `LAT,LNG` pair into a range-checked point.
pub fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got '{}'", s))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;
    Point::new(lat, lng).map_err(|e| e.to_string())
}

fn read_points(input: &Path, lat_col: &str, lng_col: &str) -> Result<Vec<Point>> {
    // Detect file format
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => read_csv(input, lat_col, lng_col),
        "geojson" | "json" => read_geojson(input),
        _ => bail!(
            "Unsupported file format: {}. Use .csv or .geojson",
            extension
        ),
    }
}

fn read_csv(input: &Path, lat_col: &str, lng_col: &str) -> Result<Vec<Point>> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h.trim() == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lng_idx = headers
        .iter()
        .position(|h| h.trim() == lng_col)
        .with_context(|| format!("Column '{}' not found in CSV", lng_col))?;

    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );

    let mut points = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        // Header is line 1
        let line = i + 2;
        let lat: f64 = record
            .get(lat_idx)
            .with_context(|| format!("Missing latitude on line {}", line))?
            .trim()
            .parse()
            .with_context(|| format!("Invalid latitude on line {}", line))?;
        let lng: f64 = record
            .get(lng_idx)
            .with_context(|| format!("Missing longitude on line {}", line))?
            .trim()
            .parse()
            .with_context(|| format!("Invalid longitude on line {}", line))?;

        points.push(Point::new(lat, lng).with_context(|| format!("Line {}", line))?);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(points)
}

fn read_geojson(input: &Path) -> Result<Vec<Point>> {
    let file = File::open(input).context("Failed to open input file")?;
    let reader = BufReader::new(file);

    let geojson: geojson::GeoJson =
        serde_json::from_reader(reader).context("Failed to parse GeoJSON")?;

    geoproc::geojson::points_from_geojson(&geojson).context("Invalid coordinates in GeoJSON")
}

fn to_output(bounds: &Bounds, centroid: &Centroid) -> ProcessOutput {
    ProcessOutput {
        centroid: CentroidOutput {
            lat: centroid.lat,
            lng: centroid.lng,
        },
        bounds: BoundsOutput {
            north: bounds.north,
            south: bounds.south,
            east: bounds.east,
            west: bounds.west,
        },
    }
}

fn print_text(count: usize, bounds: &Bounds, centroid: &Centroid) {
    println!("Points:   {}", count);
    println!("Centroid: {}, {}", centroid.lat, centroid.lng);
    println!("Bounds:");
    println!("  north: {}", bounds.north);
    println!("  south: {}", bounds.south);
    println!("  east:  {}", bounds.east);
    println!("  west:  {}", bounds.west);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_point() {
        let p = parse_point("40.7128,-74.0060").unwrap();
        assert_eq!(p, Point { lat: 40.7128, lng: -74.0060 });

        let p = parse_point(" -33.5 , 151.2 ").unwrap();
        assert_eq!(p, Point { lat: -33.5, lng: 151.2 });
    }

    #[test]
    fn test_parse_point_invalid() {
        assert!(parse_point("40.7").is_err());
        assert!(parse_point("abc,1.0").is_err());
        assert!(parse_point("91.0,0.0").unwrap_err().contains("Latitude"));
    }

    #[test]
    fn test_read_csv() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "cities.csv",
            "name,lat,lng\nNew York,40.7128,-74.0060\nLos Angeles,34.0522,-118.2437\n",
        );

        let points = read_points(&path, "lat", "lng").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Point { lat: 34.0522, lng: -118.2437 });
    }

    #[test]
    fn test_read_csv_custom_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "points.csv", "y,x\n1.0,2.0\n");

        let points = read_points(&path, "y", "x").unwrap();
        assert_eq!(points, vec![Point { lat: 1.0, lng: 2.0 }]);
    }

    #[test]
    fn test_read_csv_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "points.csv", "latitude,lng\n1.0,2.0\n");

        let err = read_points(&path, "lat", "lng").unwrap_err();
        assert!(err.to_string().contains("Column 'lat' not found"));
    }

    #[test]
    fn test_read_csv_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "points.csv", "lat,lng\n1.0,2.0\n91.0,2.0\n");

        let err = read_points(&path, "lat", "lng").unwrap_err();
        assert!(err.to_string().contains("Line 3"));
    }

    #[test]
    fn test_read_geojson() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "route.geojson",
            r#"{"type": "LineString", "coordinates": [[-74.0060, 40.7128], [-118.2437, 34.0522]]}"#,
        );

        let points = read_points(&path, "lat", "lng").unwrap();
        assert_eq!(points[0], Point { lat: 40.7128, lng: -74.0060 });
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "points.txt", "1,2");

        let err = read_points(&path, "lat", "lng").unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }

    #[test]
    fn test_run_requires_points() {
        let result = run(None, Vec::new(), "lat", "lng", OutputFormat::Text);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_empty_csv() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.csv", "lat,lng\n");

        let err = run(Some(path), Vec::new(), "lat", "lng", OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_output_shape() {
        let points = [
            Point { lat: 40.7128, lng: -74.0060 },
            Point { lat: 34.0522, lng: -118.2437 },
        ];
        let (bounds, centroid) = calculate_bounds_and_centroid(&points).unwrap();

        let value = serde_json::to_value(to_output(&bounds, &centroid)).unwrap();
        assert_eq!(value["bounds"]["north"], 40.7128);
        assert_eq!(value["bounds"]["west"], -118.2437);
        assert!(value["centroid"]["lat"].is_f64());
    }
}
