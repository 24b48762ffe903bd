//! Batch-mode front end: rank resume files on disk against a job
//! description, printing `name — score%` lines descending. Same core as
//! the HTTP service; file kind is inferred from the extension since no
//! MIME type is available.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use api::extraction::{extract_text, FileKind};
use api::ranking::{rank, Document};

#[derive(Parser)]
#[command(
    name = "rank",
    about = "Rank resumes against a job description by textual relevance"
)]
struct Args {
    /// Path to the job description (UTF-8 text file)
    #[arg(long)]
    jd: PathBuf,

    /// Resume files to rank (.pdf, .docx, .txt; anything else scores zero)
    #[arg(required = true)]
    resumes: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let job_description = fs::read_to_string(&args.jd)
        .with_context(|| format!("cannot read job description '{}'", args.jd.display()))?;

    let mut documents = Vec::with_capacity(args.resumes.len());
    for path in &args.resumes {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string();
        let kind = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| FileKind::from_extension(&e.to_lowercase()))
            .unwrap_or(FileKind::Other);
        let content =
            fs::read(path).with_context(|| format!("cannot read '{}'", path.display()))?;

        let text = match extract_text(&content, kind) {
            Ok(text) => text,
            Err(e) => {
                // Degrade this one document, keep the batch going.
                eprintln!("warning: {name}: {e}");
                String::new()
            }
        };
        documents.push(Document::new(name, text));
    }

    let ranked = rank(&job_description, &documents)?;
    for entry in &ranked {
        println!("{} — {:.2}%", entry.name, entry.score * 100.0);
    }

    Ok(())
}
