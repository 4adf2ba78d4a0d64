use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::time::Instant;

use super::dto::*;
use super::page;
use crate::error::AppResult;
use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    tracing::debug!("Processing health check request");

    let inference = state.analyzer.inference();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        threshold: state.analyzer.threshold(),
        sentiment_model: inference.sentiment_model().to_string(),
        ner_model: inference.ner_model().to_string(),
    })
}

pub async fn index() -> Html<String> {
    Html(page::render_index())
}

/// Form submission from the page; errors are rendered as HTML too
pub async fn analyze_form(
    State(state): State<AppState>,
    Form(request): Form<AnalyzeRequest>,
) -> Response {
    let start = Instant::now();
    println!("[REQUEST] POST /analyze");
    tracing::info!(headline = %request.headline, "Processing form analysis request");

    match state.analyzer.analyze(&request.headline).await {
        Ok(report) => {
            println!(
                "[RESPONSE] POST /analyze -> 200 OK ({}ms) verdict={}",
                start.elapsed().as_millis(),
                report.verdict.decision
            );
            Html(page::render_report(&report)).into_response()
        }
        Err(e) => {
            let (status, code) = e.status_and_code();
            println!(
                "[RESPONSE] POST /analyze -> {} ({}ms) {}",
                status.as_u16(),
                start.elapsed().as_millis(),
                code
            );
            (status, Html(page::render_error(&request.headline, &e.to_string()))).into_response()
        }
    }
}

pub async fn analyze_json(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    let start = Instant::now();
    println!("[REQUEST] POST /api/v1/analyze");
    tracing::info!(headline = %request.headline, "Processing JSON analysis request");

    let report = state.analyzer.analyze(&request.headline).await?;

    let duration = start.elapsed().as_millis();
    println!(
        "[RESPONSE] POST /api/v1/analyze -> 200 OK ({}ms) verdict={} votes={}",
        duration,
        report.verdict.decision,
        report.verdict.vote_count()
    );
    tracing::info!(
        report_id = %report.id,
        duration_ms = %duration,
        "Analysis response ready"
    );

    Ok(Json(report.into()))
}
