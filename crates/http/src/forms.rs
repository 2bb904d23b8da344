//! Request extraction for the record endpoints: the create/update forms and
//! the record id in the path.
//!
//! Browsers post these as `multipart/form-data` (to carry the photo), but a
//! plain urlencoded body without an image is accepted too.

use std::collections::HashMap;

use axum::Form;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Request};
use axum::http::header;
use axum::http::request::Parts;
use problem_tracker_core::{ImageUpload, ProblemInput};
use serde::Deserialize;

use crate::api_error::ApiError;

/// Name of the file part carrying the photo.
const IMAGE_FIELD: &str = "image";

/// Record id from the path. A non-integer segment names no record, so it is
/// rejected as 404 like an unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemId(pub i64);

impl<S> FromRequestParts<S> for ProblemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Non-numeric problem id");
            ApiError::NotFound("Problem not found".to_owned())
        })?;
        Ok(Self(id))
    }
}

/// Editable fields plus an optional photo, as submitted by the create/edit forms.
#[derive(Debug)]
pub struct ProblemForm {
    pub input: ProblemInput,
    pub upload: Option<ImageUpload>,
}

impl<S> FromRequest<S> for ProblemForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let (fields, upload) = if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            read_multipart(multipart).await?
        } else {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            (fields, None)
        };

        Ok(Self { input: input_from_fields(fields)?, upload })
    }
}

async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(HashMap<String, String>, Option<ImageUpload>), ApiError> {
    let mut fields = HashMap::new();
    let mut upload = None;
    while let Some(field) =
        multipart.next_field().await.map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
            // Browsers send an empty part with no filename when nothing was picked.
            if !file_name.is_empty() {
                upload = Some(ImageUpload::new(file_name, bytes.to_vec()));
            }
        } else {
            let value = field.text().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
            fields.insert(name, value);
        }
    }
    Ok((fields, upload))
}

/// All five fields must be present; empty values are accepted.
fn input_from_fields(mut fields: HashMap<String, String>) -> Result<ProblemInput, ApiError> {
    let mut take = |key: &str| {
        fields
            .remove(key)
            .ok_or_else(|| ApiError::BadRequest(format!("missing form field: {key}")))
    };
    Ok(ProblemInput {
        category: take("category")?,
        description: take("description")?,
        comment: take("comment")?,
        progress: take("progress")?,
        priority: take("priority")?,
    })
}

/// Body of the in-place progress update.
#[derive(Debug, Deserialize)]
pub struct ProgressForm {
    pub progress: Option<String>,
}

impl ProgressForm {
    pub fn into_progress(self) -> Result<String, ApiError> {
        self.progress.ok_or_else(|| ApiError::BadRequest("missing form field: progress".to_owned()))
    }
}
