//! Text classification handlers.
//!
//! POST /predict         - `{"text"}` -> `{"sentiment"}` for the web frontend.
//! POST /api/v1/classify - same input, envelope with label and similarity.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use mindspace_types::sentiment::{Label, Prediction};

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestClock};
use crate::state::AppState;

/// Request body for both classification routes.
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Response body of `POST /predict`.
#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub sentiment: Label,
}

/// Envelope payload of `POST /api/v1/classify`.
#[derive(Debug, Serialize)]
pub struct ClassificationData {
    pub label: Label,
    pub similarity: f32,
    pub model: String,
}

async fn run_prediction(state: &AppState, text: &str) -> Result<Prediction, AppError> {
    let span = tracing::info_span!(
        "classify",
        classifier.model = state.classifier.model_name(),
        classifier.text_len = text.len(),
        classifier.label = tracing::field::Empty,
        classifier.similarity = tracing::field::Empty,
    );
    let prediction = state
        .classifier
        .predict(text)
        .instrument(span.clone())
        .await?;
    span.record("classifier.label", prediction.label.0);
    span.record("classifier.similarity", prediction.similarity);
    Ok(prediction)
}

/// POST /predict - Classify a text, returning only the label.
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<TextRequest>,
) -> Result<Json<SentimentResponse>, AppError> {
    let prediction = run_prediction(&state, &body.text).await?;
    Ok(Json(SentimentResponse {
        sentiment: prediction.label,
    }))
}

/// POST /api/v1/classify - Classify a text, returning label and similarity.
pub async fn classify(
    State(state): State<AppState>,
    Json(body): Json<TextRequest>,
) -> Result<Json<ApiResponse<ClassificationData>>, AppError> {
    let clock = RequestClock::start();
    let prediction = run_prediction(&state, &body.text).await?;

    let data = ClassificationData {
        label: prediction.label,
        similarity: prediction.similarity,
        model: state.classifier.model_name().to_string(),
    };
    Ok(Json(
        clock
            .success(data)
            .with_link("self", "/api/v1/classify")
            .with_link("centroids", "/api/v1/centroids"),
    ))
}
