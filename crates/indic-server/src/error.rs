use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use indic_core::convert::ConversionError;
use indic_core::generator::GeneratorError;
use indic_namegen::NameGenError;

use crate::sessions::SessionError;

/// Message returned when the name generator upstream fails.
pub const NAME_GENERATION_FAILED: &str =
    "Failed to generate game name. Please check your API key and try again.";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// The name generator upstream failed.
    BadGateway(String),
    Unavailable(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(m)
            | Self::NotFound(m)
            | Self::BadGateway(m)
            | Self::Unavailable(m) => write!(f, "{m}"),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<GeneratorError> for AppError {
    fn from(e: GeneratorError) -> Self {
        match e {
            GeneratorError::UnknownPrebuilt(_) => Self::NotFound(e.to_string()),
            GeneratorError::Busy => Self::Unavailable(e.to_string()),
            GeneratorError::MissingFields(_) => Self::BadRequest(e.to_string()),
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(e: ConversionError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<NameGenError> for AppError {
    fn from(e: NameGenError) -> Self {
        if e.is_input_error() {
            Self::BadRequest(e.to_string())
        } else {
            tracing::warn!(error = %e, "Name generation failed");
            Self::BadGateway(NAME_GENERATION_FAILED.to_string())
        }
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Full(_) => Self::Unavailable(e.to_string()),
            SessionError::Unregistered(_) => Self::BadRequest(e.to_string()),
        }
    }
}
