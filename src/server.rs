//! HTTP surface: the prediction endpoint, a health check and the static
//! frontend.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::classifier::EmotionClassifier;
use crate::config::Config;
use crate::policy;
use crate::sentiment::SentimentAnalyzer;
use crate::types::{PredictionRequest, PredictionResponse};

/// Shared state handed to every request handler.
///
/// The classifier is loaded once at startup; `None` means the model
/// artifact was absent and stage 2 reports that per request.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
    pub classifier: Option<Arc<Mutex<Box<dyn EmotionClassifier>>>>,
}

impl AppState {
    pub fn new(
        analyzer: SentimentAnalyzer,
        classifier: Option<Box<dyn EmotionClassifier>>,
    ) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            classifier: classifier.map(|c| Arc::new(Mutex::new(c))),
        }
    }
}

/// Build the application router.
///
/// Unmatched paths fall through to the static frontend directory; `/`
/// serves its `index.html` and missing assets 404.
pub fn build_router(state: AppState, frontend_dir: &Path) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(frontend_dir))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: Config, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state, &config.frontend_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("EmotionSense listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

/// Single-shot synchronous prediction per request.
async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Json<PredictionResponse> {
    let response = match &state.classifier {
        Some(handle) => match handle.lock() {
            Ok(mut classifier) => {
                policy::predict(&request, &state.analyzer, Some(classifier.as_mut()))
            }
            // A poisoned handle means a classify call panicked; treat the
            // model as gone rather than failing the request
            Err(_) => policy::predict(&request, &state.analyzer, None),
        },
        None => policy::predict(&request, &state.analyzer, None),
    };

    Json(response)
}

/// Simple liveness endpoint
async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "healthy": true,
        "model_loaded": state.classifier.is_some(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
