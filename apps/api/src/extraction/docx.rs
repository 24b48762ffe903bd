//! DOCX text extraction via `docx-rs`.
//!
//! A .docx file is a ZIP of XML parts; `docx-rs` exposes the parsed document
//! tree, and the text lives at Paragraph → Run → Text. We collect the text
//! of every non-empty paragraph and join paragraphs with newlines, which is
//! enough fidelity for term-based ranking.

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::extraction::ExtractError;

/// Extracts the paragraph text of a DOCX document held in memory.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Docx(format!("{e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let text = paragraph_text(para);
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Concatenates the text runs of one paragraph. Runs are parts of the same
/// sentence, so no separator is inserted between them.
fn paragraph_text(para: &Paragraph) -> String {
    let mut parts = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    parts.push_str(&t.text);
                }
            }
        }
    }
    parts
}
