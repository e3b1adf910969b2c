//! Cursor-based pagination over reverse-chronological collections.
//!
//! A [`Pagination`] is handed to list operations as `Option<&mut Pagination>`.
//! Before the call its tokens become query parameters; after a successful call
//! the transport overwrites them from the response's `Link` header. Tokens always
//! come from the server's navigation links, never from the page contents, so
//! filtered, empty or reordered pages cannot desynchronize a loop.
//!
//! ```no_run
//! # async fn run(client: masta::MastaClient) -> masta::Result<()> {
//! use masta::{Id, Pagination};
//!
//! let mut followers = Vec::new();
//! let mut pg = Pagination::default();
//! loop {
//!     let page = client
//!         .get_account_followers(&Id::from("1"), Some(&mut pg))
//!         .await?;
//!     followers.extend(page);
//!     if !pg.has_next() {
//!         break;
//!     }
//! }
//! # Ok(()) }
//! ```
//!
//! A cursor is scoped to one collection and must be driven by one loop at a time;
//! the `&mut` borrow taken by every call enforces the latter.

use reqwest::header::{HeaderMap, LINK};
use url::Url;

use crate::entities::Id;

/// Position within a paginated collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Exclusive upper bound: fetch entries older than this id.
    pub max_id: Option<Id>,
    /// Exclusive lower bound: fetch only entries newer than this id.
    pub since_id: Option<Id>,
    /// Fetch the entries immediately newer than this id.
    pub min_id: Option<Id>,
    /// Page size hint. Never overwritten by navigation links.
    pub limit: Option<u32>,
}

impl Pagination {
    /// A cursor that starts (or resumes) at entries older than `max_id`.
    pub fn older_than(max_id: impl Into<Id>) -> Self {
        Self {
            max_id: Some(max_id.into()),
            ..Self::default()
        }
    }

    /// A cursor that fetches the entries immediately newer than `min_id`.
    pub fn newer_than(min_id: impl Into<Id>) -> Self {
        Self {
            min_id: Some(min_id.into()),
            ..Self::default()
        }
    }

    /// Set the page size hint.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True while the server advertised an older page.
    ///
    /// A fetch loop terminates once this returns false after a call.
    pub fn has_next(&self) -> bool {
        self.max_id.as_ref().is_some_and(|id| !id.is_empty())
    }

    /// Query pairs for the next request.
    ///
    /// Only non-empty tokens are emitted. `max_id` and `min_id` select opposite
    /// directions: when both are set, `max_id` is sent and `min_id` is dropped.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        let non_empty = |id: &Option<Id>| id.as_ref().filter(|id| !id.is_empty()).cloned();

        let max_id = non_empty(&self.max_id);
        let min_id = non_empty(&self.min_id);

        if let Some(id) = &max_id {
            pairs.push(("max_id", id.to_string()));
        }
        if let Some(id) = non_empty(&self.since_id) {
            pairs.push(("since_id", id.to_string()));
        }
        if let (Some(id), None) = (min_id, &max_id) {
            pairs.push(("min_id", id.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    /// Overwrite the position tokens from a response's `Link` header.
    ///
    /// `request_url` resolves relative link targets. A missing `next` relation
    /// clears `max_id`; a missing `prev` relation clears `since_id` and `min_id`.
    ///
    /// A `since_id` from `prev` is only kept when there is no `next` link. Paired
    /// with the new `max_id` it would bound the following request to an empty range.
    pub(crate) fn update_from_headers(&mut self, headers: &HeaderMap, request_url: &Url) {
        let links = headers
            .get_all(LINK)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| parse_link_header(v, request_url))
            .collect::<Vec<_>>();

        let next = links.iter().find(|l| l.has_rel("next"));
        let prev = links.iter().find(|l| l.has_rel("prev"));

        self.max_id = next.and_then(|l| l.query_id("max_id"));
        self.since_id = prev
            .filter(|_| next.is_none())
            .and_then(|l| l.query_id("since_id"));
        self.min_id = prev.and_then(|l| l.query_id("min_id"));
    }
}

/// One entry of an RFC 8288 `Link` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) url: Url,
    pub(crate) rels: Vec<String>,
}

impl Link {
    fn has_rel(&self, rel: &str) -> bool {
        self.rels.iter().any(|r| r.eq_ignore_ascii_case(rel))
    }

    fn query_id(&self, key: &str) -> Option<Id> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
            .map(Id::from)
    }
}

/// Parse a `Link` header value into its entries.
///
/// Entries that lack a `<target>` or whose target does not resolve are skipped.
pub(crate) fn parse_link_header(value: &str, base: &Url) -> Vec<Link> {
    let mut links = Vec::new();
    let mut rest = value;

    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start + 1..].find('>') else {
            break;
        };
        let target = &rest[start + 1..start + 1 + len];
        rest = &rest[start + 1 + len + 1..];

        // Parameters run until the next entry.
        let params_end = next_entry_start(rest);
        let params = &rest[..params_end];
        rest = &rest[params_end..];

        let Ok(url) = base.join(target.trim()) else {
            continue;
        };
        let rels = params
            .split(';')
            .filter_map(|p| {
                let (key, val) = p.split_once('=')?;
                key.trim().eq_ignore_ascii_case("rel").then(|| val.trim().trim_matches('"'))
            })
            .flat_map(|v| v.split_ascii_whitespace())
            .map(str::to_owned)
            .collect();

        links.push(Link { url, rels });
    }

    links
}

/// Offset of the `,` that separates this entry's parameters from the next entry,
/// ignoring commas inside quoted parameter values.
fn next_entry_start(s: &str) -> usize {
    let mut quoted = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => return i,
            _ => {}
        }
    }
    s.len()
}
