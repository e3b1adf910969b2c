use std::fmt::{self, Debug};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use url::Url;

use crate::errors::BuildError;

const DEFAULT_USER_AGENT: &str = concat!("masta", "@", env!("CARGO_PKG_VERSION"),);

/// Credentials and server address of one client.
///
/// Immutable once built; shared by every clone of a [`MastaClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    server: Url,
    client_id: String,
    client_secret: String,
    access_token: Option<String>,
}

impl Config {
    /// Base URL of the server, e.g. `https://example.social/`.
    pub fn server(&self) -> &Url {
        &self.server
    }

    /// OAuth client id of the registered application.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret of the registered application.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Bearer token attached to every request, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server", &self.server.as_str())
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
/// Configures a [`MastaClient`] before construction.
///
/// Most code obtains this via [`MastaClient::builder()`].
///
/// # Defaults
/// - HTTP request timeout: reqwest default (no global timeout) unless set via
///   [`Self::request_timeout`]
/// - User-agent: `masta@<crate-version>` plus any [`Self::user_agent_extra`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use masta::MastaClient;
/// let client = MastaClient::builder()
///     .server("https://example.social")
///     .access_token("token")
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, masta::BuildError>(())
/// ```
pub struct MastaClientBuilder {
    server: Option<String>,
    client_id: String,
    client_secret: String,
    access_token: Option<String>,
    http_request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA.
    user_agent_extra: Option<String>,
}

impl MastaClientBuilder {
    /// Base URL of the server. A path prefix (`https://host/social`) is kept.
    pub fn server<S: Into<String>>(&mut self, server: S) -> &mut Self {
        self.server = Some(server.into());
        self
    }

    /// OAuth client id of the registered application.
    pub fn client_id<S: Into<String>>(&mut self, client_id: S) -> &mut Self {
        self.client_id = client_id.into();
        self
    }

    /// OAuth client secret of the registered application.
    pub fn client_secret<S: Into<String>>(&mut self, client_secret: S) -> &mut Self {
        self.client_secret = client_secret.into();
        self
    }

    /// Bearer token for authenticated calls. Empty tokens are ignored.
    pub fn access_token<S: Into<String>>(&mut self, token: S) -> &mut Self {
        let token = token.into();
        self.access_token = (!token.is_empty()).then_some(token);
        self
    }

    /// Set HTTP requests timeout.
    ///
    /// An expired timeout is a transport error. For a per-call deadline that
    /// reports as a cancellation see [`MastaClient::with_deadline`].
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http_request_timeout = Some(timeout);
        self
    }

    /// Append an extra user-agent segment after the default `masta@<version>`.
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Build [MastaClient]
    pub fn build(&self) -> Result<MastaClient, BuildError> {
        let raw = self
            .server
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(BuildError::MissingServer)?;
        let server = Url::parse(raw)?;
        if !matches!(server.scheme(), "http" | "https") || server.cannot_be_a_base() {
            return Err(BuildError::UnsupportedScheme(raw.to_string()));
        }

        // Compose user agent with optional extra part.
        let user_agent = match &self.user_agent_extra {
            Some(extra) if !extra.trim().is_empty() => {
                &format!("{DEFAULT_USER_AGENT} {}", extra.trim())
            }
            _ => DEFAULT_USER_AGENT,
        };

        let mut http_builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = self.http_request_timeout {
            http_builder = http_builder.timeout(timeout);
        }

        Ok(MastaClient {
            http: http_builder.build()?,
            config: Arc::new(Config {
                server,
                client_id: self.client_id.clone(),
                client_secret: self.client_secret.clone(),
                access_token: self.access_token.clone(),
            }),
            cancel: None,
            deadline: None,
        })
    }
}

/// Client for one Mastodon or Pleroma server.
///
/// `MastaClient` owns an immutable [`Config`] (server URL and credentials) and a
/// reqwest connection pool. Every API endpoint is an `async` method on it; see the
/// crate docs for the list.
///
/// ### Concurrency
/// Clones are cheap and share the pool and the config, so one client can serve
/// any number of concurrent tasks. The only per-call mutable state is the
/// [`Pagination`](crate::Pagination) a caller passes in, which is borrowed
/// mutably for the duration of the call.
///
/// ### Cancellation
/// [`Self::with_cancellation`] and [`Self::with_deadline`] return scoped clones
/// whose calls abort the in-flight exchange and fail with
/// [`Error::Cancelled`](crate::Error::Cancelled) or
/// [`Error::DeadlineExceeded`](crate::Error::DeadlineExceeded). Nothing is retried.
///
/// ### Examples
/// ```no_run
/// # use masta::{MastaClient, Result};
/// # async fn run() -> Result<()> {
/// let client = MastaClient::builder()
///     .server("https://example.social")
///     .access_token("token")
///     .build()?;
/// for status in client.get_timeline_home(None).await? {
///     println!("{}: {}", status.account.acct, status.content);
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct MastaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Arc<Config>,
    pub(crate) cancel: Option<CancellationToken>,
    pub(crate) deadline: Option<Duration>,
}

impl MastaClient {
    /// Creates a client for `server` with an access token.
    pub fn new(server: &str, access_token: &str) -> Result<MastaClient, BuildError> {
        Self::builder().server(server).access_token(access_token).build()
    }

    /// Returns a builder to edit settings before creating [`MastaClient`].
    pub fn builder() -> MastaClientBuilder {
        MastaClientBuilder::default()
    }

    // === Getters ===

    /// Returns the client's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Scoped clones ===

    /// A clone whose calls abort as soon as `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> MastaClient {
        MastaClient {
            cancel: Some(token),
            ..self.clone()
        }
    }

    /// A clone whose calls abort when they run longer than `deadline`.
    pub fn with_deadline(&self, deadline: Duration) -> MastaClient {
        MastaClient {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// A clone that authenticates with `token` instead.
    ///
    /// The connection pool is shared; the original client is unchanged.
    pub fn with_access_token(&self, token: impl Into<String>) -> MastaClient {
        let token = token.into();
        MastaClient {
            config: Arc::new(Config {
                access_token: (!token.is_empty()).then_some(token),
                ..Config::clone(&self.config)
            }),
            ..self.clone()
        }
    }
}
