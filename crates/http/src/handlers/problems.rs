use axum::{
    Form, Json,
    extract::State,
    response::{Html, Redirect},
};
use std::sync::Arc;

use problem_tracker_core::ProblemRecord;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::forms::{ProblemForm, ProblemId, ProgressForm};
use crate::response_types::ProgressUpdateResponse;
use crate::views;

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let service = Arc::clone(&state.service);
    let problems = blocking_result(move || service.list()).await?;
    Ok(Html(views::index_page(&problems)))
}

/// Redirects back to the list so a reload does not resubmit the form.
pub async fn create(
    State(state): State<Arc<AppState>>,
    form: ProblemForm,
) -> Result<Redirect, ApiError> {
    let service = Arc::clone(&state.service);
    blocking_result(move || service.create(&form.input, form.upload)).await?;
    Ok(Redirect::to("/"))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    ProblemId(id): ProblemId,
) -> Result<Html<String>, ApiError> {
    let service = Arc::clone(&state.service);
    let problem = blocking_result(move || service.get(id)).await?;
    Ok(Html(views::edit_page(&problem)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ProblemId(id): ProblemId,
    form: ProblemForm,
) -> Result<Redirect, ApiError> {
    let service = Arc::clone(&state.service);
    blocking_result(move || service.update(id, &form.input, form.upload)).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ProblemId(id): ProblemId,
) -> Result<Redirect, ApiError> {
    let service = Arc::clone(&state.service);
    blocking_result(move || service.delete(id)).await?;
    Ok(Redirect::to("/"))
}

/// Echoes the new value so the page can update in place.
pub async fn update_progress(
    State(state): State<Arc<AppState>>,
    ProblemId(id): ProblemId,
    Form(form): Form<ProgressForm>,
) -> Result<Json<ProgressUpdateResponse>, ApiError> {
    let progress = form.into_progress()?;
    let service = Arc::clone(&state.service);
    let value = progress.clone();
    blocking_result(move || service.update_progress(id, &value)).await?;
    Ok(Json(ProgressUpdateResponse::new(progress)))
}

pub async fn list_json(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProblemRecord>>, ApiError> {
    let service = Arc::clone(&state.service);
    blocking_json(move || service.list()).await
}

pub async fn get_json(
    State(state): State<Arc<AppState>>,
    ProblemId(id): ProblemId,
) -> Result<Json<ProblemRecord>, ApiError> {
    let service = Arc::clone(&state.service);
    blocking_json(move || service.get(id)).await
}
