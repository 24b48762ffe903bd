//! Relevance ranking — orders candidate resumes by TF-IDF cosine similarity
//! against a job description.
//!
//! This is the one pure, UI-free piece of the service: `rank` is a
//! deterministic function of its inputs with no shared state, so it is
//! independently testable and safe to call from any front end (HTTP handler,
//! CLI, tests).

pub mod stopwords;
pub mod tfidf;

use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

use crate::ranking::tfidf::{cosine_similarity, fit_transform};

/// A candidate document after text extraction. The name is a display label
/// (typically the uploaded filename) and is not required to be unique.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// One entry of a ranking result. `score` is cosine similarity in [0, 1].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedDocument {
    pub name: String,
    pub score: f32,
}

/// Preconditions of [`rank`] that are rejected before any vectorization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("job description is empty")]
    EmptyReference,

    #[error("no candidate documents to rank")]
    NoDocuments,
}

/// Ranks `documents` by similarity to `reference`, descending.
///
/// The corpus is `[reference] + document texts`; the vocabulary is derived
/// from that corpus alone. Ties keep their original input order (stable
/// sort). A document sharing no surviving terms with the reference, or the
/// reference itself surviving tokenization with nothing, scores 0.0.
pub fn rank(reference: &str, documents: &[Document]) -> Result<Vec<RankedDocument>, RankError> {
    if reference.trim().is_empty() {
        return Err(RankError::EmptyReference);
    }
    if documents.is_empty() {
        return Err(RankError::NoDocuments);
    }

    let mut corpus: Vec<&str> = Vec::with_capacity(1 + documents.len());
    corpus.push(reference);
    corpus.extend(documents.iter().map(|d| d.text.as_str()));

    let vectors = fit_transform(&corpus);
    let reference_vector = &vectors[0];

    let mut ranked: Vec<RankedDocument> = documents
        .iter()
        .zip(&vectors[1..])
        .map(|(doc, vector)| RankedDocument {
            name: doc.name.clone(),
            score: cosine_similarity(reference_vector, vector),
        })
        .collect();

    // Vec::sort_by is stable, so equal scores keep input order.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(ranked)
}
