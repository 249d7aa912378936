//! Geo-Processor Service Library
//!
//! HTTP handlers, error translation and router for the geo-processing
//! service. This library is used by both the geoproc-service binary and
//! integration tests.

pub mod config;
pub mod error;
pub mod handlers;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Re-export commonly used types for convenience
pub use config::ServiceConfig;
pub use error::ApiError;
pub use handlers::{
    BoundsResponse, CentroidResponse, ErrorResponse, HealthResponse, ProcessRequest,
    ProcessResponse, ValidationErrorResponse,
};

/// OpenAPI documentation for the geo-processing service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geo-Processor Service",
        version = "0.1.0",
        description = "A service to process geographic coordinates and calculate bounds and centroids.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::read_root,
        handlers::process_points,
        handlers::health_check,
    ),
    components(
        schemas(
            handlers::PointInput,
            handlers::ProcessRequest,
            handlers::ProcessResponse,
            handlers::CentroidResponse,
            handlers::BoundsResponse,
            handlers::ErrorResponse,
            handlers::ValidationErrorResponse,
            handlers::WelcomeResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "GeoProcessing", description = "Bounds and centroid computation"),
        (name = "system", description = "System and health endpoints")
    )
)]
pub struct ApiDoc;

/// Routes without documentation or middleware.
///
/// Request bodies are not size-capped: axum's default 2 MB limit is lifted so
/// large point lists reach validation. Size limits belong to the proxy or
/// transport in front of the service.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/process", post(handlers::process_points))
        .route("/health", get(handlers::health_check))
        .layer(DefaultBodyLimit::disable())
}

/// The complete application: routes, Swagger UI, tracing, CORS and
/// panic-to-500 translation.
pub fn app() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CatchPanicLayer::custom(error::handle_panic)),
        )
}
