//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::FileKind;
use crate::screening::batch::screen_batch;
use crate::screening::models::{ScreeningResponse, UploadedResume};
use crate::state::AppState;

/// POST /api/v1/screenings
///
/// Multipart form with a `job_description` text field and one or more
/// `resumes` file fields. Returns the ranked batch; per-document extraction
/// failures come back as warnings, not errors.
pub async fn handle_screen(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut job_description = String::new();
    let mut uploads: Vec<UploadedResume> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("job_description") => {
                job_description = field.text().await?;
            }
            Some("resumes") => {
                let name = field
                    .file_name()
                    .unwrap_or("unnamed")
                    .to_string();
                let kind = field
                    .content_type()
                    .map(FileKind::from_content_type)
                    .unwrap_or(FileKind::Other);
                let content = field.bytes().await?.to_vec();
                uploads.push(UploadedResume {
                    name,
                    kind,
                    content,
                });
            }
            // Unknown form fields are ignored rather than rejected.
            _ => {}
        }
    }

    info!("Screening {} uploaded resume(s)", uploads.len());
    let response = screen_batch(&job_description, &uploads, state.config.preview_chars)?;
    Ok(Json(response))
}
