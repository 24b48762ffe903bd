//! Request/response models for the Screening API.

use serde::Serialize;

use crate::extraction::FileKind;
use crate::ranking::RankedDocument;

/// One uploaded resume as received from the multipart form, before
/// extraction.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    /// Display name (the uploaded filename); not required to be unique.
    pub name: String,
    pub kind: FileKind,
    pub content: Vec<u8>,
}

/// Full response of a screening request.
#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    /// Descending by score; ties keep upload order.
    pub ranked: Vec<RankedResume>,
    /// Extracted-text previews, in upload order (only successfully
    /// extracted documents appear here).
    pub previews: Vec<ResumePreview>,
    /// Per-document extraction failures. These documents still appear in
    /// `ranked`, scored against empty text.
    pub warnings: Vec<ExtractionWarning>,
}

#[derive(Debug, Serialize)]
pub struct RankedResume {
    pub name: String,
    pub score: f32,
    /// `score` formatted as a percentage for direct display, e.g. "83.12%".
    pub match_percent: String,
}

impl From<RankedDocument> for RankedResume {
    fn from(doc: RankedDocument) -> Self {
        let match_percent = format!("{:.2}%", doc.score * 100.0);
        Self {
            name: doc.name,
            score: doc.score,
            match_percent,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumePreview {
    pub name: String,
    pub text: String,
    /// True when the extracted text was longer than the preview window.
    pub truncated: bool,
}

#[derive(Debug, Serialize)]
pub struct ExtractionWarning {
    pub name: String,
    pub reason: String,
}
