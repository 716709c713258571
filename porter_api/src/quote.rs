use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use porter_quoting::order::Order;
use porter_quoting::quote::DeliveryQuote;

use crate::{error::ApiError, state::AppState};

pub struct QuoteResponse(DeliveryQuote);

impl IntoResponse for QuoteResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

pub async fn quote_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Order>, JsonRejection>,
) -> Result<QuoteResponse, ApiError> {
    // Missing or malformed bodies surface as 400 with the error envelope.
    let Json(order) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let quote = state.quoting.quote(&order)?;

    Ok(QuoteResponse(quote))
}
