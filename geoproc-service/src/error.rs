//! Translation of failures into HTTP error responses.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geoproc::{GeoError, ValidationErrors};

use crate::handlers::{ErrorResponse, ValidationErrorResponse};

/// Message sent alongside the per-field details of a validation failure.
pub const VALIDATION_MESSAGE: &str = "Validation error in the input. Please check the data sent.";

/// Every way a request can fail.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or out-of-range input. Always 400.
    Validation(ValidationErrors),
    /// Domain error raised by the calculator. Always 400.
    Domain(GeoError),
    /// Anything else. Always 500.
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Domain(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<GeoError> for ApiError {
    fn from(e: GeoError) -> Self {
        ApiError::Domain(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(errors) => (
                status,
                Json(ValidationErrorResponse {
                    detail: errors,
                    message: VALIDATION_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::Domain(e) => (
                status,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal(message) => (
                status,
                Json(ErrorResponse {
                    detail: format!("Internal server error: {}", message),
                }),
            )
                .into_response(),
        }
    }
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    }
}

/// Run request processing for `payload`, turning a panic into
/// [`ApiError::Internal`].
///
/// The panic is logged together with the payload that caused it.
pub fn catch_internal<T>(
    payload: &[u8],
    f: impl FnOnce() -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|err| {
        let message = panic_message(err.as_ref());
        tracing::error!(
            error = %message,
            payload = %String::from_utf8_lossy(payload),
            "Internal server error (500)"
        );
        Err(ApiError::Internal(message))
    })
}

/// Turn a panic caught by `CatchPanicLayer` into a 500 response.
///
/// Only reached for panics outside [`catch_internal`], where the request body
/// is no longer available. The panic message goes into the body; the
/// backtrace does not.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(err.as_ref());

    tracing::error!(error = %message, "Unhandled panic while processing request");

    ApiError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_status_mapping() {
        let errors = geoproc::validate::validate_points(&serde_json::json!({})).unwrap_err();
        let validation = ApiError::from(errors);
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let domain = ApiError::from(GeoError::EmptyPoints);
        assert_eq!(domain.status(), StatusCode::BAD_REQUEST);

        let internal = ApiError::Internal("boom".to_string());
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Domain(GeoError::EmptyPoints).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_catch_internal_passes_results_through() {
        let ok = catch_internal(b"{}", || Ok(7));
        assert!(matches!(ok, Ok(7)));

        let err = catch_internal::<()>(b"{}", || Err(GeoError::EmptyPoints.into()));
        assert!(matches!(err, Err(ApiError::Domain(GeoError::EmptyPoints))));
    }

    #[test]
    fn test_catch_internal_logs_payload_on_panic() {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&logs);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || CaptureWriter(Arc::clone(&writer)))
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            catch_internal::<()>(br#"{"points": "boom"}"#, || panic!("kaboom"))
        });

        match result {
            Err(ApiError::Internal(message)) => assert_eq!(message, "kaboom"),
            other => panic!("expected an internal error, got {:?}", other),
        }
        let output = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
        assert!(output.contains("kaboom"));
        assert!(output.contains(r#"{"points": "boom"}"#));
    }

    #[test]
    fn test_handle_panic_str_payload() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_handle_panic_string_payload() {
        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
