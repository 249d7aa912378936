//! HTTP request handlers for the geo-processing service.

use axum::{body::Bytes, Json};
use geoproc::{
    calculate_bounds_and_centroid, validate::validate_body, Bounds, Centroid, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{catch_internal, ApiError};

/// A point as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointInput {
    /// Latitude in decimal degrees (-90 to 90).
    #[schema(minimum = -90.0, maximum = 90.0)]
    pub lat: f64,
    /// Longitude in decimal degrees (-180 to 180).
    #[schema(minimum = -180.0, maximum = 180.0)]
    pub lng: f64,
}

/// Body of `POST /process`.
///
/// Only used to document and build requests; incoming bodies go through
/// [`geoproc::validate`] so that every invalid field can be reported.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessRequest {
    /// Points to process. At least one is required.
    #[schema(min_items = 1)]
    pub points: Vec<PointInput>,
}

/// Mean position of the submitted points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CentroidResponse {
    pub lat: f64,
    pub lng: f64,
}

/// Bounding box of the submitted points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct BoundsResponse {
    /// Maximum latitude.
    pub north: f64,
    /// Minimum latitude.
    pub south: f64,
    /// Maximum longitude.
    pub east: f64,
    /// Minimum longitude.
    pub west: f64,
}

/// Successful `POST /process` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ProcessResponse {
    pub centroid: CentroidResponse,
    pub bounds: BoundsResponse,
}

impl ProcessResponse {
    pub fn new(bounds: Bounds, centroid: Centroid) -> Self {
        Self {
            centroid: CentroidResponse {
                lat: centroid.lat,
                lng: centroid.lng,
            },
            bounds: BoundsResponse {
                north: bounds.north,
                south: bounds.south,
                east: bounds.east,
                west: bounds.west,
            },
        }
    }
}

/// Error response for domain and internal errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub detail: String,
}

/// Error response for input validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// One entry per invalid field, each with `type`, `loc`, `msg` and `input`.
    #[schema(value_type = Vec<Object>)]
    pub detail: ValidationErrors,
    /// Fixed summary message.
    pub message: String,
}

/// Root endpoint response.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Welcome message.
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse))
)]
pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Geo-Processor Service".to_string(),
    })
}

/// Compute the centroid and bounds of a list of points.
///
/// The body is taken as raw bytes so that undecodable JSON is reported in the
/// same shape as any other validation failure. Its size is not capped (see
/// [`crate::routes`]).
///
/// # Returns
///
/// - `200 OK` with centroid and bounds
/// - `400 Bad Request` with per-field details if the input is invalid
/// - `500 Internal Server Error` on unexpected errors
#[utoipa::path(
    post,
    path = "/process",
    tag = "GeoProcessing",
    request_body = ProcessRequest,
    responses(
        (status = 200, description = "Centroid and bounds of the points", body = ProcessResponse),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn process_points(body: Bytes) -> Result<Json<ProcessResponse>, ApiError> {
    catch_internal(&body, || process_payload(&body)).map(Json)
}

fn process_payload(body: &[u8]) -> Result<ProcessResponse, ApiError> {
    let points = validate_body(body).map_err(|errors| {
        tracing::warn!(
            errors = %errors,
            payload = %String::from_utf8_lossy(body),
            "Validation error (400)"
        );
        ApiError::Validation(errors)
    })?;

    tracing::debug!(points = points.len(), "Processing points");

    let (bounds, centroid) = calculate_bounds_and_centroid(&points).map_err(|e| {
        tracing::error!(
            error = %e,
            payload = %String::from_utf8_lossy(body),
            "Error in process_points"
        );
        ApiError::Domain(e)
    })?;

    Ok(ProcessResponse::new(bounds, centroid))
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
