//! Error taxonomy for the search pipeline.
//!
//! Every failure in the core is one of these variants, propagated upward by
//! ordinary `Result` returns. Nothing is retried; a failure at any stage
//! aborts the whole search call. The HTTP handler layer owns the mapping
//! from variant to response status code, the core only tags `Upstream`
//! with the status the upstream service itself returned.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A required request field was missing or empty.
    #[error("missing or empty field: {0}")]
    Validation(&'static str),

    /// The upstream service answered with a non-success status.
    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The caller-supplied pattern is not a valid regular expression.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The request to the upstream service failed at the transport level
    /// (connection failure, timeout, or an undecodable listing body).
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Raw gist content was not valid UTF-8.
    #[error("raw content is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}
