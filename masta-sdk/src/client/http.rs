use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use reqwest::multipart::Form;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::core::MastaClient;
use crate::errors::{Error, RequestError, Result};
use crate::pagination::Pagination;
use crate::params::Params;
use crate::util::{check_http_status, decode_json};

/// Body descriptor of one API call.
#[derive(Debug)]
pub(crate) enum Body {
    /// No parameters.
    Empty,
    /// Query string for `GET`, urlencoded form body for every other method.
    Params(Params),
    /// `multipart/form-data` body (uploads).
    Multipart(Form),
}

impl From<Params> for Body {
    fn from(params: Params) -> Self {
        Body::Params(params)
    }
}

impl MastaClient {
    /// Absolute URL of an API path given as segments, e.g. `["api", "v1", "statuses", id]`.
    ///
    /// Segments are percent-encoded and appended to the server's base path.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.server().clone();
        url.path_segments_mut()
            .map_err(|()| RequestError::Validation {
                message: format!("server URL `{}` cannot be a base", self.config.server()),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Perform one call and decode the JSON success payload into `T`.
    ///
    /// If `cursor` is given, its tokens are sent and then overwritten from the
    /// response's `Link` header.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &[&str],
        body: impl Into<Body>,
        cursor: Option<&mut Pagination>,
    ) -> Result<T> {
        let bytes = self.exchange(method, path, body.into(), cursor).await?;
        decode_json(&bytes)
    }

    /// Perform one call and ignore the success payload (which may be empty).
    pub(crate) async fn call_discard(
        &self,
        method: Method,
        path: &[&str],
        body: impl Into<Body>,
    ) -> Result<()> {
        self.exchange(method, path, body.into(), None).await?;
        Ok(())
    }

    async fn exchange(
        &self,
        method: Method,
        path: &[&str],
        body: Body,
        cursor: Option<&mut Pagination>,
    ) -> Result<bytes::Bytes> {
        let mut url = self.endpoint(path)?;

        // 1) Query: GET parameters, then the cursor position.
        let (query, body) = match body {
            Body::Params(params) if method == Method::GET => (Some(params), Body::Empty),
            other => (None, other),
        };
        let mut pairs: Vec<(String, String)> = query
            .iter()
            .flat_map(|p| p.pairs())
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        if let Some(pg) = cursor.as_deref() {
            pairs.extend(pg.query_pairs().into_iter().map(|(k, v)| (k.to_owned(), v)));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        // 2) Build the request.
        let mut rb = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");
        if let Some(token) = self.config.access_token() {
            rb = rb.bearer_auth(token);
        }
        rb = match body {
            Body::Empty => rb,
            Body::Params(params) if params.is_empty() => rb,
            Body::Params(params) => rb
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(params.encode()),
            Body::Multipart(form) => rb.multipart(form),
        };

        // 3) Send, classify and read the body under the caller's cancellation scope.
        debug!(%method, %url, "sending request");
        let (headers, bytes) = self
            .guard(async {
                let resp = rb.send().await?;
                debug!(status = %resp.status(), %url, "received response");
                let resp = check_http_status(resp).await?;
                let headers: HeaderMap = resp.headers().clone();
                let bytes = resp.bytes().await?;
                Ok::<_, Error>((headers, bytes))
            })
            .await?;

        // 4) Advance the cursor from the server's navigation links.
        if let Some(pg) = cursor {
            pg.update_from_headers(&headers, &url);
        }

        Ok(bytes)
    }

    /// Run `fut` under this client's cancellation token and deadline, if any.
    async fn guard<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout(deadline, fut).await {
                    Ok(res) => res,
                    Err(_elapsed) => Err(Error::DeadlineExceeded),
                },
                None => fut.await,
            }
        };

        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(Error::Cancelled),
                res = bounded => res,
            },
            None => bounded.await,
        }
    }
}
