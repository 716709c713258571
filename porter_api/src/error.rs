use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use porter_quoting::error::QuoteError;
use serde::Serialize;

pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<QuoteError> for ApiError {
    fn from(error: QuoteError) -> Self {
        // Every quoting failure is correctable by fixing the order.
        ApiError::BadRequest(error.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
