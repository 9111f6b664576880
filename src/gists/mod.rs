//! Upstream Gist Client Module
//!
//! Talks to the public gist-hosting REST API: lists a user's gists page by
//! page and downloads the full raw content of individual gist files.
//!
//! ## Responsibilities
//! - **Listing**: Walking the paginated listing endpoint, following the
//!   `link` response header until the last page is reached.
//! - **Raw content**: Fetching the complete body of a single gist file. The
//!   listing endpoint may truncate inline content for large files; the raw
//!   URL always returns the whole body.
//! - **Types**: The deserialized shapes of the upstream listing records.
//!
//! ## Submodules
//! - **`client`**: The HTTP client wrapper (`GistClient`).
//! - **`pagination`**: `link` header parsing.
//! - **`types`**: Upstream Data Transfer Objects (DTOs).

pub mod client;
pub mod pagination;
pub mod types;
