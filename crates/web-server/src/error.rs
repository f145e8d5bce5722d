use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Report error: {0}")]
    Report(#[from] reports::ReportError),
    #[error("Report task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match self {
            AppError::Report(report_err) => {
                tracing::error!(error = ?report_err, "Report generation failed.");
                "The report could not be built"
            }
            AppError::Task(join_err) => {
                tracing::error!(error = ?join_err, "Report task did not complete.");
                "An internal error occurred while building the report"
            }
        };

        let body = Json(json!({ "error": error_message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
