//! REST API handlers for cart enrichment
//!
//! This module implements the HTTP endpoints that rewrite a cart's PLU codes
//! into internal item ids.

use super::{helpers::*, models::*};
use crate::envelope::HandlerResponse;
use crate::error::ApiError;
use crate::state::{AppState, SharedState};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/cart", get(get_cart).post(enrich_posted_cart))
}

/// Endpoint: GET /cart
/// Enriches the cart loaded at startup.
async fn get_cart(State(state): State<SharedState>) -> HandlerResponse {
    cart_handler(&state).await
}

/// Endpoint: POST /cart
/// Enriches a caller-supplied cart with the loaded PLU index.
async fn enrich_posted_cart(
    State(state): State<SharedState>,
    body: Result<Json<Cart>, JsonRejection>,
) -> Result<HandlerResponse, ApiError> {
    let Json(cart) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let enriched = enrich_cart(&cart, &state.plu_index);
    tracing::info!("Enriched posted cart: {}", format_enrichment_summary(&enriched));

    Ok(HandlerResponse::data(&enriched))
}

/// Returns the startup cart, enriched, on a `data` property.
pub async fn cart_handler(state: &AppState) -> HandlerResponse {
    let enriched = enrich_cart(&state.cart, &state.plu_index);
    tracing::debug!("Enriched cart: {}", format_enrichment_summary(&enriched));

    HandlerResponse::data(&enriched)
}
