//! Resume screening service: extracts plain text from uploaded resumes,
//! ranks them against a job description by TF-IDF cosine similarity, and
//! serves the ranked list over a small HTTP surface.
//!
//! The core (`ranking`) is a pure library with no UI or framework
//! dependency; `screening`/`routes` are the presentation adapter, and the
//! `rank` binary is a batch-mode equivalent of the upload form.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod ranking;
pub mod routes;
pub mod screening;
pub mod state;
