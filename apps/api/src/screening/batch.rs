//! Batch orchestration: extract every upload, rank the batch, build the
//! response. Extraction failures are tagged per document and never abort
//! the batch — the failed document participates with empty text and sinks
//! to the bottom of the ranking.

use tracing::warn;

use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::ranking::{rank, Document, RankError};
use crate::screening::models::{
    ExtractionWarning, ResumePreview, ScreeningResponse, UploadedResume,
};

/// Screens one batch of uploaded resumes against a job description.
///
/// Validation failures (empty job description, no uploads) are blocking and
/// reported before any extraction work.
pub fn screen_batch(
    job_description: &str,
    uploads: &[UploadedResume],
    preview_chars: usize,
) -> Result<ScreeningResponse, AppError> {
    if job_description.trim().is_empty() {
        return Err(RankError::EmptyReference.into());
    }
    if uploads.is_empty() {
        return Err(RankError::NoDocuments.into());
    }

    let mut documents = Vec::with_capacity(uploads.len());
    let mut previews = Vec::new();
    let mut warnings = Vec::new();

    for upload in uploads {
        match extract_text(&upload.content, upload.kind) {
            Ok(text) => {
                previews.push(make_preview(&upload.name, &text, preview_chars));
                documents.push(Document::new(upload.name.clone(), text));
            }
            Err(e) => {
                warn!("Extraction failed for '{}': {e}", upload.name);
                warnings.push(ExtractionWarning {
                    name: upload.name.clone(),
                    reason: e.to_string(),
                });
                documents.push(Document::new(upload.name.clone(), String::new()));
            }
        }
    }

    let ranked = rank(job_description, &documents)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(ScreeningResponse {
        ranked,
        previews,
        warnings,
    })
}

fn make_preview(name: &str, text: &str, preview_chars: usize) -> ResumePreview {
    let truncated = text.chars().count() > preview_chars;
    let preview: String = text.chars().take(preview_chars).collect();
    ResumePreview {
        name: name.to_string(),
        text: preview,
        truncated,
    }
}
