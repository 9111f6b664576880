//! Gist Search Service Library
//!
//! This library crate defines the modules behind the binary executable
//! (`main.rs`): an HTTP service that searches a user's public gists for a
//! regular-expression match and returns the matching raw-content URLs.
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled parts:
//!
//! - **`error`**: The tagged error taxonomy shared by the whole pipeline.
//!   Every failure is classified here; the HTTP handlers are the only place
//!   where a kind becomes a response status code.
//! - **`gists`**: The upstream client. Walks the paginated gist-listing
//!   endpoint of the hosting service and downloads full raw file contents.
//! - **`search`**: The search pipeline. Compiles the caller's pattern,
//!   scans gist contents for the first match per gist, and exposes the
//!   operation over HTTP.

pub mod error;
pub mod gists;
pub mod search;
