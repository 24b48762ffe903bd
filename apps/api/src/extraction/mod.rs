//! Plain-text extraction from uploaded resume files.
//!
//! Each supported format has a dedicated decoder; the dispatcher maps a
//! declared content type (or file extension, for the CLI) to a [`FileKind`]
//! and hands the raw bytes to the right one. Extraction failures are
//! per-document: the caller decides whether to warn and continue, never this
//! module.

pub mod docx;
pub mod pdf;

use thiserror::Error;

/// Declared type of an uploaded file. `Other` is anything we do not decode;
/// it extracts to an empty string so one unrecognized upload never aborts a
/// whole screening batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    PlainText,
    Other,
}

impl FileKind {
    /// Maps a MIME content type (as sent by the browser in multipart upload)
    /// to a kind.
    pub fn from_content_type(content_type: &str) -> Self {
        match content_type {
            "application/pdf" => FileKind::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                FileKind::Docx
            }
            "text/plain" => FileKind::PlainText,
            _ => FileKind::Other,
        }
    }

    /// Maps a lowercase file extension to a kind. Used by the CLI, where no
    /// MIME type is available.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "pdf" => FileKind::Pdf,
            "docx" => FileKind::Docx,
            "txt" | "text" | "md" => FileKind::PlainText,
            _ => FileKind::Other,
        }
    }
}

/// Per-document extraction failure. Isolated to the offending document; the
/// batch loop converts these into warnings rather than propagating them.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file is not valid UTF-8 text")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("failed to extract text from DOCX: {0}")]
    Docx(String),
}

/// Extracts plain text from `bytes` according to `kind`.
///
/// `Other` always succeeds with an empty string (degrade gracefully); the
/// document will simply score at or near zero and sink to the bottom.
pub fn extract_text(bytes: &[u8], kind: FileKind) -> Result<String, ExtractError> {
    match kind {
        FileKind::Pdf => pdf::extract(bytes),
        FileKind::Docx => docx::extract(bytes),
        FileKind::PlainText => Ok(String::from_utf8(bytes.to_vec())?),
        FileKind::Other => Ok(String::new()),
    }
}
