// Screening API: multipart upload of resumes + a job description,
// ranked response. All ranking goes through `crate::ranking` — the
// handlers here are presentation glue only.

pub mod batch;
pub mod handlers;
pub mod models;
