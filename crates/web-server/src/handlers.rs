use crate::{AppState, error::AppError};
use axum::{Json, extract::State};
use reports::{ReportInfo, ReportRequest};
use serde_json::Value;
use std::sync::Arc;
use ui_tree::ReportEnvelope;

/// # POST /api/reports/daily-trades
/// Builds the daily trades report for the group mask and window in the body.
/// Missing or malformed fields mean "no filter"; an absent body is an empty one.
pub async fn generate_daily_trades(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Result<Json<ReportEnvelope>, AppError> {
    let request = body
        .map(|Json(value)| ReportRequest::from_json(&value))
        .unwrap_or_default();
    tracing::info!(group = %request.group, from = ?request.from, to = ?request.to, "Daily trades report requested.");

    // Backend calls block, so the report is built off the async workers.
    let envelope = tokio::task::spawn_blocking(move || {
        state.report.generate(state.backend.as_ref(), &request)
    })
    .await??;

    Ok(Json(envelope))
}

/// # GET /api/reports/daily-trades/about
pub async fn daily_trades_about() -> Json<ReportInfo> {
    Json(ReportInfo::daily_trades())
}
