//! REST API handlers for combo calorie estimates

use super::{estimator::estimate_calories, models::*};
use crate::envelope::HandlerResponse;
use crate::error::ApiError;
use crate::state::{AppState, SharedState};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for combo operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/4pc-chicken/calories", get(get_four_piece_calories))
        .route("/combo/calories", post(estimate_posted_combo))
}

/// Endpoint: GET /4pc-chicken/calories
async fn get_four_piece_calories(State(state): State<SharedState>) -> HandlerResponse {
    calorie_counter_handler(&state).await
}

/// Endpoint: POST /combo/calories
/// Estimates a caller-supplied combo document.
async fn estimate_posted_combo(
    body: Result<Json<ComboDocument>, JsonRejection>,
) -> Result<HandlerResponse, ApiError> {
    let Json(document) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let range = estimate_calories(&Combo::from(document));
    Ok(HandlerResponse::data(&range))
}

/// Returns the min & max calories of the 4 piece chicken combo, computed at
/// startup, on a `data` property.
pub async fn calorie_counter_handler(state: &AppState) -> HandlerResponse {
    HandlerResponse::data(&state.combo_calories)
}
