//! New Relic SCIM HTTP client (reqwest-based).
//!
//! [`ScimClient`] owns the transport: it attaches credentials, sends one
//! request per call and turns non-2xx answers into
//! [`ScimClientError::Status`]. Resource operations live in
//! [`crate::users`] and [`crate::groups`].

use crate::auth::BearerToken;
use crate::config::ClientConfig;
use crate::error::{ScimClientError, ScimClientResult};
use crate::models::ScimDocument;
use crate::reply::{decode_reply, ScimReply};
use bytes::Bytes;
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};
use url::Url;

/// Client for the New Relic SCIM 2.0 provisioning API.
///
/// Immutable after construction. Cloning is cheap and clones share the
/// connection pool, so one client can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ScimClient {
    /// Base URL, always ending with `/`.
    base_url: Url,
    token: BearerToken,
    http_client: Client,
}

impl ScimClient {
    /// Client for the default endpoint with a 20 second timeout.
    pub fn new(api_token: impl Into<String>) -> ScimClientResult<Self> {
        Self::from_config(ClientConfig::new(api_token))
    }

    /// Client built from explicit settings.
    pub fn from_config(config: ClientConfig) -> ScimClientResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("newrelic-scim/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ScimClientError::InvalidConfig(format!("Failed to build HTTP client: {e}"))
            })?;

        Self::with_http_client(&config, http_client)
    }

    /// Client using a pre-built `reqwest::Client`. The config's timeout is
    /// ignored in favor of whatever `http_client` was built with.
    pub fn with_http_client(config: &ClientConfig, http_client: Client) -> ScimClientResult<Self> {
        let base_url = config.validate()?;
        Ok(Self {
            base_url,
            token: BearerToken::new(config.api_token.clone()),
            http_client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `<base>/<segment>` or `<base>/<segment>/<id>`, with `id` percent-encoded
    /// as a single path segment.
    pub(crate) fn resource_url(&self, segment: &str, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    // ── Resource round trips ──────────────────────────────────────────

    /// GET a resource or collection and decode the reply.
    pub(crate) async fn fetch<T, E>(&self, url: Url) -> ScimClientResult<ScimReply<T, E>>
    where
        T: DeserializeOwned + ScimDocument,
        E: DeserializeOwned + Default,
    {
        debug!("SCIM GET {}", url);
        let body = self.execute(self.http_client.get(url)).await?;
        decode_reply(&body)
    }

    /// GET a collection narrowed by `<attribute> eq "<value>"`.
    pub(crate) async fn search<T, E>(
        &self,
        mut url: Url,
        attribute: &str,
        value: &str,
    ) -> ScimClientResult<ScimReply<T, E>>
    where
        T: DeserializeOwned + ScimDocument,
        E: DeserializeOwned + Default,
    {
        let filter = eq_filter(attribute, value);
        url.query_pairs_mut().append_pair("filter", &filter);
        debug!("SCIM GET {} (filter={:?})", url, filter);
        let body = self.execute(self.http_client.get(url)).await?;
        decode_reply(&body)
    }

    /// Send `body` as JSON with `method` and decode the reply.
    pub(crate) async fn send_json<B, T, E>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> ScimClientResult<ScimReply<T, E>>
    where
        B: Serialize,
        T: DeserializeOwned + ScimDocument,
        E: DeserializeOwned + Default,
    {
        let payload = serde_json::to_vec(body).map_err(ScimClientError::Encode)?;
        debug!("SCIM {} {}", method, url);
        let builder = self.http_client.request(method, url).body(payload);
        let body = self.execute(builder).await?;
        decode_reply(&body)
    }

    /// DELETE a resource. The response body is never parsed.
    pub(crate) async fn remove(&self, url: Url) -> ScimClientResult<()> {
        debug!("SCIM DELETE {}", url);
        self.execute(self.http_client.delete(url)).await?;
        Ok(())
    }

    // ── Transport ─────────────────────────────────────────────────────

    /// Authenticate and send one request, returning the raw body on 2xx.
    async fn execute(&self, builder: RequestBuilder) -> ScimClientResult<Bytes> {
        let response = self.token.apply(builder).send().await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;

        if status.is_success() {
            Ok(body)
        } else {
            warn!(status = status.as_u16(), "SCIM request to {} failed", url);
            Err(ScimClientError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            })
        }
    }
}

/// SCIM equality filter, e.g. `userName eq "jdoe"`.
pub(crate) fn eq_filter(attribute: &str, value: &str) -> String {
    format!("{attribute} eq \"{}\"", escape_scim_filter_value(value))
}

/// Escape a value for use inside a SCIM filter string literal.
///
/// Per RFC 7644 Section 3.4.2.2, string values in filter expressions are
/// enclosed in double-quotes. Backslashes and double-quotes are escaped so the
/// value cannot terminate the literal.
fn escape_scim_filter_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
