use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::domain::OnboardingApplication;
use super::scoring::ScoringPreset;
use super::service::ReadinessService;

/// Router builder exposing the scoring and risk-analysis endpoints.
pub fn scoring_router(service: Arc<ReadinessService>) -> Router {
    Router::new()
        .route("/api/v1/scoring/calculate", post(calculate_handler))
        .route("/api/v1/scoring/risk-analysis", post(risk_analysis_handler))
        .with_state(service)
}

/// Scoring request: the application bundle plus optional preset and as-of
/// date overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreRequest {
    #[serde(flatten)]
    pub application: OnboardingApplication,
    pub preset: Option<ScoringPreset>,
    pub as_of: Option<NaiveDate>,
}

pub(crate) async fn calculate_handler(
    State(service): State<Arc<ReadinessService>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response("Failed to calculate score", rejection),
    };

    let preset = request.preset.unwrap_or_else(|| service.default_preset());
    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    let score = service.score(&request.application, Some(preset), as_of);

    info!(
        preset = preset.label(),
        overall = score.overall,
        recommendations = score.recommendations.len(),
        "scored onboarding application"
    );

    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": score })),
    )
        .into_response()
}

pub(crate) async fn risk_analysis_handler(
    State(service): State<Arc<ReadinessService>>,
    payload: Result<Json<OnboardingApplication>, JsonRejection>,
) -> Response {
    let Json(application) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response("Failed to analyze risk factors", rejection),
    };

    let findings = service.risk_factors(&application);

    info!(findings = findings.len(), "screened onboarding application");

    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": findings })),
    )
        .into_response()
}

/// Malformed input is the only failure mode: surface the rejection's status
/// with the operation context in the failure envelope.
fn rejection_response(context: &str, rejection: JsonRejection) -> Response {
    let status = rejection.status();
    warn!(%status, context, "rejected scoring request payload");

    let payload = json!({
        "success": false,
        "error": context,
        "details": rejection.body_text(),
    });
    (status, Json(payload)).into_response()
}
