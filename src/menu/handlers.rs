//! REST API handler for the menu

use crate::envelope::HandlerResponse;
use crate::state::{AppState, SharedState};
use axum::{extract::State, routing::get, Router};

/// Creates routes for menu operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/menu", get(get_menu))
}

/// Endpoint: GET /menu
async fn get_menu(State(state): State<SharedState>) -> HandlerResponse {
    menu_handler(&state).await
}

/// Returns the static menu on a `data` property.
pub async fn menu_handler(state: &AppState) -> HandlerResponse {
    HandlerResponse::data(state.menu.get_menu())
}
