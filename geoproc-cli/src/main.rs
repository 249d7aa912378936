use anyhow::Result;
use clap::{Parser, Subcommand};
use geoproc::Point;
use std::path::PathBuf;

mod commands;

/// Bounds and centroid of geographic points
#[derive(Parser)]
#[command(name = "geoproc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute bounds and centroid of points given inline or in a file
    Process {
        /// Input file (CSV or GeoJSON)
        input: Option<PathBuf>,

        /// A point as LAT,LNG (repeatable)
        #[arg(
            short,
            long = "point",
            value_name = "LAT,LNG",
            value_parser = commands::process::parse_point,
            allow_hyphen_values = true
        )]
        points: Vec<Point>,

        /// Column name for latitude (CSV only)
        #[arg(long, env = "GEOPROC_LAT_COL", default_value = "lat")]
        lat_col: String,

        /// Column name for longitude (CSV only)
        #[arg(long, env = "GEOPROC_LNG_COL", default_value = "lng")]
        lng_col: String,

        /// Output result as JSON
        #[arg(short, long, conflicts_with = "geojson")]
        json: bool,

        /// Output bounds as a GeoJSON Feature
        #[arg(short, long)]
        geojson: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            points,
            lat_col,
            lng_col,
            json,
            geojson,
        } => {
            let format = if json {
                commands::process::OutputFormat::Json
            } else if geojson {
                commands::process::OutputFormat::GeoJson
            } else {
                commands::process::OutputFormat::Text
            };
            commands::process::run(input, points, &lat_col, &lng_col, format)
        }
    }
}
