// ============================================================
// Layer 1 — Web Server
// ============================================================
// Serves the screening form and the prediction endpoint:
//
//   GET  /          → landing page
//   GET  /input     → contact details page
//   POST /input     → feature form (contact carried along)
//   POST /predict   → diagnosis or list of field errors
//   GET  /health    → "ok"
//
// The model artifact is loaded exactly once, before the socket
// is bound. If it is missing the server never starts. After
// that the state is read-only and shared through an Arc.
//
// Reference: axum documentation

mod handlers;
pub mod views;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::application::predict_use_case::PredictUseCase;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Artifact written by the training job
    pub model_path: String,
    /// Address to listen on
    pub bind: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            model_path: "models/model.json".to_string(),
            bind:       "0.0.0.0:5000".to_string(),
        }
    }
}

/// Process-wide state, built once at startup.
pub struct AppState {
    pub predictor: PredictUseCase,
}

impl AppState {
    pub fn new(predictor: PredictUseCase) -> Self {
        Self { predictor }
    }
}

/// Build the axum [`Router`] with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/input", get(handlers::show_contact).post(handlers::submit_contact))
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Load the artifact, bind, and serve until the process exits.
pub async fn serve(config: ServeConfig) -> Result<()> {
    let predictor = PredictUseCase::from_model_path(&config.model_path)?;
    let app       = build_router(Arc::new(AppState::new(predictor)));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Cannot bind to '{}'", config.bind))?;
    tracing::info!("Listening on http://{}", config.bind);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::application::train_use_case::{TrainConfig, TrainUseCase};
    use crate::domain::diagnosis::Diagnosis;
    use crate::test_support::{read_rows, write_dataset};

    /// Train a model into `dir` and build the router around it.
    fn test_app(dir: &std::path::Path) -> (Router, Vec<HashMap<String, String>>) {
        let csv = write_dataset(dir, 120, None);
        let cfg = TrainConfig {
            data_path:  csv.display().to_string(),
            model_path: dir.join("models/model.json").display().to_string(),
            ..TrainConfig::default()
        };
        TrainUseCase::new(cfg.clone()).execute().unwrap();

        let predictor = PredictUseCase::from_model_path(&cfg.model_path).unwrap();
        (build_router(Arc::new(AppState::new(predictor))), read_rows(&csv))
    }

    fn encode(form: &HashMap<String, String>) -> String {
        form.iter()
            .map(|(k, v)| format!("{}={}", k, v.replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn post_form(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_welcome_and_health() {
        let dir      = tempfile::tempdir().unwrap();
        let (app, _) = test_app(dir.path());

        let req  = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("href=\"/input\""));

        let req  = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(body_text(resp).await, "ok");
    }

    #[tokio::test]
    async fn test_contact_page_prefills_from_query() {
        let dir      = tempfile::tempdir().unwrap();
        let (app, _) = test_app(dir.path());

        let req  = Request::builder().uri("/input?name=Ada").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("value=\"Ada\""));
    }

    #[tokio::test]
    async fn test_contact_submit_renders_feature_form() {
        let dir      = tempfile::tempdir().unwrap();
        let (app, _) = test_app(dir.path());

        let resp = app
            .oneshot(post_form("/input", "name=Ada&email=ada%40example.org".into()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(resp).await;
        assert!(html.contains("action=\"/predict\""));
        assert!(html.contains("name=\"Forgetfulness\""));
        assert!(html.contains("value=\"ada@example.org\""));
    }

    #[tokio::test]
    async fn test_predict_dataset_row() {
        let dir         = tempfile::tempdir().unwrap();
        let (app, rows) = test_app(dir.path());

        let resp = app.oneshot(post_form("/predict", encode(&rows[0]))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(resp).await;
        assert!(html.contains("data-error=\"false\""));
        assert!(
            html.contains(&views::escape(Diagnosis::POSITIVE_MESSAGE))
                || html.contains(&views::escape(Diagnosis::NEGATIVE_MESSAGE))
        );
    }

    #[tokio::test]
    async fn test_predict_missing_feature() {
        let dir         = tempfile::tempdir().unwrap();
        let (app, rows) = test_app(dir.path());

        let mut form = rows[1].clone();
        form.remove("DiastolicBP");

        let resp = app.oneshot(post_form("/predict", encode(&form))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(resp).await;
        assert!(html.contains("data-error=\"true\""));
        assert!(html.contains("missing value for DiastolicBP"));
    }

    #[tokio::test]
    async fn test_predict_invalid_bmi() {
        let dir         = tempfile::tempdir().unwrap();
        let (app, rows) = test_app(dir.path());

        let mut form = rows[2].clone();
        form.insert("BMI".into(), "abc".into());

        let resp = app.oneshot(post_form("/predict", encode(&form))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(resp).await.contains("invalid value for BMI: abc"));
    }

    #[tokio::test]
    async fn test_serve_fails_without_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ServeConfig {
            model_path: dir.path().join("model.json").display().to_string(),
            ..ServeConfig::default()
        };
        let err = serve(cfg).await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
