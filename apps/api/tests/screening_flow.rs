//! End-to-end flow over real files: build documents on disk, extract text
//! per declared kind, rank against a job description. Mirrors how the
//! `rank` CLI consumes the library.

use std::fs;
use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};
use tempfile::tempdir;

use api::extraction::{extract_text, FileKind};
use api::ranking::{rank, Document};

fn docx_bytes(lines: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for line in lines {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
    }
    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).unwrap();
    buf.into_inner()
}

#[test]
fn mixed_format_batch_ranks_relevant_resume_first() {
    let dir = tempdir().unwrap();

    let docx_path = dir.path().join("backend.docx");
    fs::write(
        &docx_path,
        docx_bytes(&[
            "Senior Backend Engineer",
            "Python and distributed systems experience",
        ]),
    )
    .unwrap();

    let txt_path = dir.path().join("designer.txt");
    fs::write(&txt_path, "graphic designer with photoshop skills").unwrap();

    let mut documents = Vec::new();
    for path in [&docx_path, &txt_path] {
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        let ext = path.extension().unwrap().to_str().unwrap();
        let kind = FileKind::from_extension(ext);
        let content = fs::read(path).unwrap();
        let text = extract_text(&content, kind).unwrap();
        documents.push(Document::new(name, text));
    }

    let ranked = rank(
        "senior backend engineer python distributed systems",
        &documents,
    )
    .unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].name, "backend.docx");
    assert!(ranked[0].score > 0.5, "scored {}", ranked[0].score);
    assert!(ranked[1].score < 0.05, "scored {}", ranked[1].score);
}

#[test]
fn unreadable_file_degrades_instead_of_aborting() {
    let dir = tempdir().unwrap();

    let bad_path = dir.path().join("corrupt.docx");
    fs::write(&bad_path, b"not actually a docx").unwrap();

    let good_path = dir.path().join("good.txt");
    fs::write(&good_path, "rust engineer").unwrap();

    let mut documents = Vec::new();
    for path in [&bad_path, &good_path] {
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        let ext = path.extension().unwrap().to_str().unwrap();
        let content = fs::read(path).unwrap();
        // Per-document failure becomes empty text; the batch continues.
        let text = extract_text(&content, FileKind::from_extension(ext)).unwrap_or_default();
        documents.push(Document::new(name, text));
    }

    let ranked = rank("rust engineer", &documents).unwrap();
    assert_eq!(ranked[0].name, "good.txt");
    assert_eq!(ranked[1].name, "corrupt.docx");
    assert_eq!(ranked[1].score, 0.0);
}
