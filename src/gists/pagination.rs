//! Pagination `link` header parsing.

use regex::Regex;

/// Extracts the `next` page URL from a `link` response header.
///
/// Only the first comma-separated segment of the header is considered: the
/// upstream API leads with the `next` link while it has further pages, and
/// leads with `prev` (or `first`) once the walk is on the last page. A
/// header whose first segment carries any other relation therefore
/// terminates pagination.
pub fn next_link(header: &str) -> Option<String> {
    let first = header.split(',').next()?;
    let re = Regex::new(r#"^\s*<([^>]+)>\s*;\s*rel="next"\s*$"#).unwrap();
    re.captures(first).map(|caps| caps[1].to_string())
}
