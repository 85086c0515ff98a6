// ============================================================
// Layer 1 — HTTP Handlers
// ============================================================
// Axum handlers for the screening form and prediction endpoint.
// A rejected form is 422; a classifier failure is 500 and is
// logged, the user only sees a generic page.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::domain::contact::ContactInfo;
use crate::web::{views, AppState};

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Landing page
pub async fn welcome() -> Html<String> {
    Html(views::welcome_page())
}

/// Contact page; `?name=..&email=..` pre-fills it
pub async fn show_contact(Query(contact): Query<ContactInfo>) -> Html<String> {
    Html(views::contact_page(&contact))
}

/// Contact details submitted; show the feature form
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(contact): Form<ContactInfo>,
) -> Html<String> {
    Html(views::feature_form_page(&contact, state.predictor.feature_order()))
}

/// Validate the submitted features and classify them
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    match state.predictor.execute(&form) {
        Ok(outcome) => {
            let status = if outcome.error {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::OK
            };
            (status, Html(views::result_page(&outcome))).into_response()
        }
        Err(e) => {
            tracing::error!("Prediction failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error_page())).into_response()
        }
    }
}
