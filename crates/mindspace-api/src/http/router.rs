//! Axum router configuration with middleware.
//!
//! Routes:
//! - `POST /predict` (frontend-compatible `{"sentiment": n}` body)
//! - `POST /api/v1/classify`, `GET /api/v1/centroids` (envelope format)
//! - `GET /health`
//!
//! Middleware: CORS restricted to `server.allowed_origins` with credentials,
//! HTTP tracing.

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);

    let api_routes = Router::new()
        .route("/classify", post(handlers::predict::classify))
        .route("/centroids", get(handlers::centroids::get_centroids));

    Router::new()
        .route("/predict", post(handlers::predict::predict))
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for browser clients.
///
/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of using a wildcard. A `"*"` entry mirrors any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o.trim() == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o.trim()) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin: {e}");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// GET /health - Liveness check. Centroids exist once the server is listening.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use mindspace_core::clustering::ClusterParams;
    use mindspace_core::context::ClassifierContext;
    use mindspace_core::embedding::{BoxEmbedder, Embedder};
    use mindspace_types::config::ServiceConfig;
    use mindspace_types::error::EmbeddingError;
    use mindspace_types::sentiment::TrainingExample;

    /// (positive words, negative words, constant bias). The bias keeps every
    /// embedding non-zero, empty text included.
    struct PolarityEmbedder;

    impl Embedder for PolarityEmbedder {
        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts
                .iter()
                .map(|text| {
                    let lower = text.to_lowercase();
                    let count = |words: &[&str]| {
                        lower
                            .split_whitespace()
                            .filter(|w| words.contains(w))
                            .count() as f32
                    };
                    vec![
                        count(&["great", "happy", "amazing"]),
                        count(&["terrible", "sad", "awful"]),
                        1.0,
                    ]
                })
                .collect())
        }

        fn model_name(&self) -> &str {
            "polarity-test"
        }

        fn dimension(&self) -> usize {
            3
        }
    }

    async fn test_router() -> Router {
        let examples = vec![
            TrainingExample::new("great day", 1),
            TrainingExample::new("happy and amazing", 1),
            TrainingExample::new("terrible news", 0),
            TrainingExample::new("sad awful week", 0),
        ];
        let classifier =
            ClassifierContext::prepare(BoxEmbedder::new(PolarityEmbedder), &examples, ClusterParams::default())
                .await
                .unwrap();
        build_router(AppState::new(classifier, ServiceConfig::default()))
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_predict_returns_sentiment() {
        let app = test_router().await;

        let response = app
            .clone()
            .oneshot(json_post("/predict", r#"{"text": "what an amazing morning"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"sentiment": 1}));

        let response = app
            .oneshot(json_post("/predict", r#"{"text": "awful awful day"}"#))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, serde_json::json!({"sentiment": 0}));
    }

    #[tokio::test]
    async fn test_classify_envelope() {
        let app = test_router().await;
        let response = app
            .oneshot(json_post("/api/v1/classify", r#"{"text": "so happy"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["label"], 1);
        assert_eq!(body["data"]["model"], "polarity-test");
        assert!(body["data"]["similarity"].as_f64().unwrap() > 0.9);
        assert!(body["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_empty_text_is_classified() {
        let app = test_router().await;
        let response = app
            .oneshot(json_post("/predict", r#"{"text": ""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        // Equidistant from both classes; the lower label wins the tie.
        assert_eq!(body_json(response).await, serde_json::json!({"sentiment": 0}));
    }

    #[tokio::test]
    async fn test_missing_text_field_is_rejected() {
        let app = test_router().await;
        let response = app
            .oneshot(json_post("/predict", r#"{"body": "great"}"#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_centroids_summary() {
        let app = test_router().await;
        let response = app
            .oneshot(Request::builder().uri("/api/v1/centroids").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["dimension"], 3);
        assert_eq!(body["data"]["training_examples"], 4);
        assert_eq!(body["data"]["classes"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["classes"][0]["label"], 0);
        assert_eq!(body["data"]["classes"][0]["centroids"], 2);
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router().await;
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let app = test_router().await;
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/predict")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_cors_rejects_other_origin() {
        let app = test_router().await;
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/predict")
            .header(header::ORIGIN, "https://evil.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
