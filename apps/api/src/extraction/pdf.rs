//! PDF text extraction via `pdf-extract`.

use crate::extraction::ExtractError;

/// Extracts the text content of a PDF held in memory.
///
/// A structurally valid PDF with no extractable text (scanned images, empty
/// pages) yields an empty string rather than an error; only decoder failures
/// are reported, and those stay scoped to this one document.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
