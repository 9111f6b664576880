//! Upstream HTTP client: gist listing with pagination and raw-content
//! download.

use super::pagination::next_link;
use super::types::Gist;
use crate::error::SearchError;
use std::time::Duration;

/// Upper bound for every individual upstream request.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Base URL of the public gist-hosting API.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Client for the gist-hosting service.
///
/// Holds a single pooled `reqwest::Client`. The struct is immutable after
/// construction, so one shared instance can serve concurrent search calls,
/// each running its own independent fetch pipeline.
pub struct GistClient {
    api_base: String,
    http: reqwest::Client,
}

impl GistClient {
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Creates a client against a specific API base URL. Tests point this
    /// at a local fixture server.
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .user_agent("gist-search")
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Lists every gist of `username`, walking the paginated listing
    /// endpoint until no `next` link remains.
    ///
    /// The returned order is page order, then within-page order, exactly as
    /// delivered by the upstream service. A non-success status on any page
    /// fails the whole walk immediately.
    pub async fn list_gists(
        &self,
        username: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Gist>, SearchError> {
        let mut gists = Vec::new();
        let mut url = format!(
            "{}/users/{}/gists?page={}&per_page={}",
            self.api_base, username, page, per_page
        );

        loop {
            tracing::debug!("Fetching gist page: {}", url);
            let response = self.http.get(&url).send().await?;
            let status = response.status();

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SearchError::Upstream {
                    status: status.as_u16(),
                    body,
                });
            }

            // The header is read before `json()` consumes the response.
            let link_header = response
                .headers()
                .get(reqwest::header::LINK)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();

            let mut page_gists: Vec<Gist> = response.json().await?;
            gists.append(&mut page_gists);

            match next_link(&link_header) {
                Some(next) => url = next,
                None => break,
            }
        }

        tracing::debug!("Listed {} gists for user {}", gists.len(), username);
        Ok(gists)
    }

    /// Downloads the full raw content of a single gist file.
    ///
    /// The body is decoded strictly as UTF-8; content that does not decode
    /// fails the call rather than being replaced lossily.
    pub async fn fetch_raw(&self, url: &str) -> Result<String, SearchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

impl Default for GistClient {
    fn default() -> Self {
        Self::new()
    }
}
