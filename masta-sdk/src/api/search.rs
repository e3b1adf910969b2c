use std::fmt;

use reqwest::Method;

use crate::entities::Results;
use crate::params::Params;
use crate::{MastaClient, Pagination, Result};

/// Restricts a search to one kind of result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Accounts,
    Hashtags,
    Statuses,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchType::Accounts => "accounts",
            SearchType::Hashtags => "hashtags",
            SearchType::Statuses => "statuses",
        })
    }
}

/// Options of [`MastaClient::search`]. Unset and zero values are not sent.
///
/// Searches only honour `max_id`, `min_id` and `limit` of a cursor; `since_id`
/// has no effect.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub kind: Option<SearchType>,
    /// Skip unreviewed hashtags.
    pub exclude_unreviewed: bool,
    /// Attempt a WebFinger lookup for remote accounts and statuses.
    pub resolve: bool,
    /// Only accounts the user follows.
    pub following: bool,
    /// Only statuses authored by this account.
    pub account_id: Option<String>,
    /// Skip this many results.
    pub offset: u32,
}

impl SearchOptions {
    pub(crate) fn params(&self, query: &str) -> Params {
        let mut params = Params::new();
        params
            .push("q", query)
            .push_opt("type", self.kind)
            .push_opt("account_id", self.account_id.as_deref())
            .push_flag("resolve", self.resolve)
            .push_flag("following", self.following)
            .push_flag("exclude_unreviewed", self.exclude_unreviewed);
        if self.offset != 0 {
            params.push("offset", self.offset);
        }
        params
    }
}

impl MastaClient {
    /// Searches accounts, statuses and hashtags.
    pub async fn search(
        &self,
        query: &str,
        opts: &SearchOptions,
        pg: Option<&mut Pagination>,
    ) -> Result<Results> {
        self.call(Method::GET, &["api", "v2", "search"], opts.params(query), pg)
            .await
    }

    /// Searches with nothing but a query and the `resolve` switch.
    pub async fn search_simple(&self, query: &str, resolve: bool) -> Result<Results> {
        let mut params = Params::new();
        params.push("q", query).push("resolve", resolve);
        self.call(Method::GET, &["api", "v2", "search"], params, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_are_omitted() {
        assert_eq!(SearchOptions::default().params("rust").encode(), "q=rust");
    }

    #[test]
    fn every_option_is_encoded() {
        let opts = SearchOptions {
            kind: Some(SearchType::Accounts),
            exclude_unreviewed: true,
            resolve: true,
            following: true,
            account_id: Some("7".into()),
            offset: 20,
        };
        let params = opts.params("@alice@example.social");
        assert_eq!(params.get("q"), Some("@alice@example.social"));
        assert_eq!(params.get("type"), Some("accounts"));
        assert_eq!(params.get("account_id"), Some("7"));
        assert_eq!(params.get("resolve"), Some("true"));
        assert_eq!(params.get("following"), Some("true"));
        assert_eq!(params.get("exclude_unreviewed"), Some("true"));
        assert_eq!(params.get("offset"), Some("20"));
    }
}
