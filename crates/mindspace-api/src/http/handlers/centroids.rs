//! GET /api/v1/centroids - Per-class centroid counts and model details.

use axum::extract::State;
use axum::Json;

use mindspace_types::centroid::CentroidSummary;

use crate::http::response::{ApiResponse, RequestClock};
use crate::state::AppState;

pub async fn get_centroids(State(state): State<AppState>) -> Json<ApiResponse<CentroidSummary>> {
    let clock = RequestClock::start();
    Json(
        clock
            .success(state.classifier.summary())
            .with_link("self", "/api/v1/centroids")
            .with_link("classify", "/api/v1/classify"),
    )
}
