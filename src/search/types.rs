//! Search API Data Types

use serde::{Deserialize, Serialize};

/// Request body of the search endpoint.
///
/// Both fields are optional at the schema level so that an absent field is
/// rejected by the pipeline's own validation (a 400 with an error body)
/// instead of the framework's body rejection.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
}

/// One matching gist, identified by the raw URL of the first file whose
/// content matched. A gist contributes at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistMatch {
    pub raw_url: String,
}

/// Successful response of the search endpoint.
///
/// Echoes the inputs and carries the matches in gist-list order. Built once
/// per call, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub status: String,
    pub username: String,
    pub pattern: String,
    pub matches: Vec<GistMatch>,
}

/// Error response body shared by every failure path.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}
