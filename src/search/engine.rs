//! Match engine and search orchestration.

use super::types::{GistMatch, SearchResult};
use crate::error::SearchError;
use crate::gists::client::GistClient;
use crate::gists::types::Gist;
use regex::Regex;

/// Gists are listed with the upstream's maximum page size to keep the
/// number of listing round-trips low.
const LIST_PER_PAGE: u32 = 100;

/// Scans every gist for the first file whose content matches `pattern`.
///
/// The pattern is compiled exactly once, before any content is downloaded.
/// Files are re-fetched on every call (no cache), the content is searched
/// for an occurrence anywhere (not an anchored match), and a gist's
/// remaining files are skipped as soon as one matches. Matches come back in
/// gist-list order. Any download failure aborts the whole scan.
pub async fn find_matches(
    client: &GistClient,
    gists: &[Gist],
    pattern: &str,
) -> Result<Vec<GistMatch>, SearchError> {
    let re = Regex::new(pattern)?;

    let mut matches = Vec::new();
    for gist in gists {
        for file in gist.files.values() {
            let content = client.fetch_raw(&file.raw_url).await?;
            if re.is_match(&content) {
                tracing::debug!("Gist {} matched via {}", gist.id, file.raw_url);
                matches.push(GistMatch {
                    raw_url: file.raw_url.clone(),
                });
                break; // one match per gist is enough
            }
        }
    }

    Ok(matches)
}

/// Runs one full search: validate the inputs, list the user's gists, scan
/// them, and shape the result payload.
///
/// Stateless; every call is an independent pipeline and collaborator errors
/// propagate unmodified.
pub async fn search(
    client: &GistClient,
    username: &str,
    pattern: &str,
) -> Result<SearchResult, SearchError> {
    if username.is_empty() {
        return Err(SearchError::Validation("username"));
    }
    if pattern.is_empty() {
        return Err(SearchError::Validation("pattern"));
    }

    let gists = client.list_gists(username, LIST_PER_PAGE, 1).await?;
    let matches = find_matches(client, &gists, pattern).await?;
    tracing::info!(
        "Search for user {} matched {} of {} gists",
        username,
        matches.len(),
        gists.len()
    );

    Ok(SearchResult {
        status: "success".to_string(),
        username: username.to_string(),
        pattern: pattern.to_string(),
        matches,
    })
}
