//! Upstream Gist Data Types
//!
//! Deserialized shapes of the records returned by the gist-listing
//! endpoint. Only the fields the search pipeline actually reads are kept;
//! the upstream payload carries many more.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One gist record from a listing page.
///
/// Constructed from a page of the listing response, scanned once by the
/// match engine, then discarded. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gist {
    pub id: String,
    /// File name -> file entry, as delivered by the upstream service.
    pub files: HashMap<String, GistFile>,
}

/// A single file entry inside a gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistFile {
    /// URL returning the file's full, untruncated raw content.
    pub raw_url: String,
}
