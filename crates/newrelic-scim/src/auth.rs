//! Bearer token authentication for the provisioning API.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::RequestBuilder;

/// Content type sent with every request, including bodiless ones.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// API token attached to every outgoing request.
///
/// The [`Debug`] impl redacts the token to prevent accidental credential
/// exposure in log output.
#[derive(Clone)]
pub struct BearerToken(String);

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}

impl BearerToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Set the `Authorization` and `Content-Type` headers on a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.0)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
    }
}
