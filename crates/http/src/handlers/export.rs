use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_result;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Regenerates the report and sends it as a download.
pub async fn export(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let service = Arc::clone(&state.service);
    let summary = blocking_result(move || service.export_report()).await?;

    let bytes = tokio::fs::read(&summary.path).await.map_err(anyhow::Error::from)?;
    let file_name = summary
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("problem_report.xlsx")
        .replace('"', "");
    let disposition = format!("attachment; filename=\"{file_name}\"");

    Ok((
        [(header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_owned()), (header::CONTENT_DISPOSITION, disposition)],
        bytes,
    )
        .into_response())
}
