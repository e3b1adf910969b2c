use reqwest::Method;

use crate::client::http::Body;
use crate::entities::{Account, Id, Instance, Relationship, Status};
use crate::params::Params;
use crate::{MastaClient, Pagination, Result};

impl MastaClient {
    /// Returns an account.
    pub async fn get_account(&self, id: &Id) -> Result<Account> {
        self.call(
            Method::GET,
            &["api", "v1", "accounts", id.as_str()],
            Body::Empty,
            None,
        )
        .await
    }

    /// Returns the account the access token belongs to.
    pub async fn get_account_current_user(&self) -> Result<Account> {
        self.call(
            Method::GET,
            &["api", "v1", "accounts", "verify_credentials"],
            Body::Empty,
            None,
        )
        .await
    }

    /// Returns the statuses posted by an account.
    pub async fn get_account_statuses(
        &self,
        id: &Id,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Status>> {
        self.account_collection(id, "statuses", pg).await
    }

    /// Returns the followers of an account.
    pub async fn get_account_followers(
        &self,
        id: &Id,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Account>> {
        self.account_collection(id, "followers", pg).await
    }

    /// Returns the accounts an account follows.
    pub async fn get_account_following(
        &self,
        id: &Id,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Account>> {
        self.account_collection(id, "following", pg).await
    }

    /// Follows an account.
    pub async fn account_follow(&self, id: &Id) -> Result<Relationship> {
        self.call(
            Method::POST,
            &["api", "v1", "accounts", id.as_str(), "follow"],
            Body::Empty,
            None,
        )
        .await
    }

    /// Unfollows an account.
    pub async fn account_unfollow(&self, id: &Id) -> Result<Relationship> {
        self.call(
            Method::POST,
            &["api", "v1", "accounts", id.as_str(), "unfollow"],
            Body::Empty,
            None,
        )
        .await
    }

    /// Searches accounts by name or `user@domain` address.
    ///
    /// A `limit` of 0 leaves the page size to the server.
    pub async fn accounts_search(&self, query: &str, limit: u32) -> Result<Vec<Account>> {
        let mut params = Params::new();
        params.push("q", query);
        if limit > 0 {
            params.push("limit", limit);
        }
        self.call(
            Method::GET,
            &["api", "v1", "accounts", "search"],
            params,
            None,
        )
        .await
    }

    /// Returns the server's metadata.
    pub async fn get_instance(&self) -> Result<Instance> {
        self.call(Method::GET, &["api", "v1", "instance"], Body::Empty, None)
            .await
    }

    /// Returns the hostnames of the instances this server federates with.
    pub async fn get_instance_peers(&self) -> Result<Vec<String>> {
        self.call(
            Method::GET,
            &["api", "v1", "instance", "peers"],
            Body::Empty,
            None,
        )
        .await
    }

    async fn account_collection<T: serde::de::DeserializeOwned>(
        &self,
        id: &Id,
        collection: &str,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<T>> {
        self.call(
            Method::GET,
            &["api", "v1", "accounts", id.as_str(), collection],
            Body::Empty,
            pg,
        )
        .await
    }
}
