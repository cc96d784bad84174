use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{charges, payments, state::AppState};

async fn health() -> &'static str {
    "ok"
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/payment", post(payments::create_payment))
        .route(
            "/charge",
            post(charges::create_charge).get(charges::list_charges),
        )
        .route("/charge/{id}", get(charges::get_charge))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
