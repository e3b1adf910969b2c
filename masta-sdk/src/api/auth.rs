//! OAuth application registration and token exchange.
//!
//! ```no_run
//! # async fn run() -> masta::Result<()> {
//! use masta::{AppConfig, MastaClient};
//!
//! let anon = MastaClient::builder().server("https://example.social").build()?;
//! let app = anon.register_app(&AppConfig::new("my-client")).await?;
//!
//! let client = MastaClient::builder()
//!     .server("https://example.social")
//!     .client_id(app.client_id)
//!     .client_secret(app.client_secret)
//!     .build()?
//!     .authenticate("alice@example.social", "hunter2")
//!     .await?;
//! println!("logged in as {}", client.get_account_current_user().await?.acct);
//! # Ok(()) }
//! ```

use reqwest::Method;

use crate::client::http::Body;
use crate::entities::{AccessToken, AppRegistration, Application};
use crate::params::Params;
use crate::{MastaClient, Result};

/// Redirect URI that makes the server display the authorization code instead of
/// redirecting.
pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

const DEFAULT_SCOPES: &str = "read write follow push";

/// Application registration request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_name: String,
    /// Space separated. Defaults to [`OOB_REDIRECT_URI`].
    pub redirect_uris: String,
    /// Space separated. Defaults to `read write follow push`.
    pub scopes: String,
    pub website: Option<String>,
}

impl AppConfig {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            redirect_uris: OOB_REDIRECT_URI.to_string(),
            scopes: DEFAULT_SCOPES.to_string(),
            website: None,
        }
    }
}

impl MastaClient {
    /// Registers an OAuth application. No credentials are needed.
    pub async fn register_app(&self, app: &AppConfig) -> Result<AppRegistration> {
        let mut params = Params::new();
        params
            .push("client_name", &app.client_name)
            .push("redirect_uris", &app.redirect_uris)
            .push("scopes", &app.scopes)
            .push_opt("website", app.website.as_deref());
        self.call(Method::POST, &["api", "v1", "apps"], params, None)
            .await
    }

    /// Exchanges a username and password for a token (password grant).
    ///
    /// Returns a clone of this client that carries the new token; `self` is unchanged.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<MastaClient> {
        let mut params = self.token_params("password");
        params
            .push("username", username)
            .push("password", password)
            .push("scope", DEFAULT_SCOPES);
        self.exchange_token(params).await
    }

    /// Exchanges an authorization code for a token.
    ///
    /// `redirect_uri` must be the one the code was issued for.
    pub async fn authenticate_code(&self, code: &str, redirect_uri: &str) -> Result<MastaClient> {
        let mut params = self.token_params("authorization_code");
        params.push("code", code).push("redirect_uri", redirect_uri);
        self.exchange_token(params).await
    }

    /// Returns the application the access token was issued to.
    pub async fn verify_app_credentials(&self) -> Result<Application> {
        self.call(
            Method::GET,
            &["api", "v1", "apps", "verify_credentials"],
            Body::Empty,
            None,
        )
        .await
    }

    fn token_params(&self, grant_type: &str) -> Params {
        let mut params = Params::new();
        params
            .push("grant_type", grant_type)
            .push("client_id", self.config.client_id())
            .push("client_secret", self.config.client_secret());
        params
    }

    async fn exchange_token(&self, params: Params) -> Result<MastaClient> {
        let token: AccessToken = self
            .call(Method::POST, &["oauth", "token"], params, None)
            .await?;
        tracing::debug!(scope = %token.scope, "obtained access token");
        Ok(self.with_access_token(token.access_token))
    }
}
