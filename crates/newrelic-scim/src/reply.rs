//! Decoding of response bodies into a success shape plus an error shape.
//!
//! The server may answer 2xx with a SCIM error document. Every body is first
//! decoded into the expected success shape; if that shape's first schema is
//! the error message schema, the same bytes are decoded again into the error
//! shape. The error shape stays at its `Default` otherwise.

use crate::error::{ScimClientError, ScimClientResult};
use crate::models::{ScimDocument, ScimErrorDetails};
use serde::de::DeserializeOwned;

/// Outcome of an operation that reached the server and got a 2xx answer.
///
/// Check [`ScimReply::is_protocol_error`] before trusting `resource`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScimReply<T, E> {
    /// Body decoded as the success shape. Mostly empty when `error` is set.
    pub resource: T,
    /// Body decoded as the error shape, only when it declared the error schema.
    pub error: E,
}

impl<T, E: ScimErrorDetails> ScimReply<T, E> {
    /// Whether the server reported a SCIM error in a 2xx body, judged by the
    /// error schema rather than by `status`, which servers may omit.
    pub fn is_protocol_error(&self) -> bool {
        self.error.is_present()
    }

    /// Collapse into a `Result`, yielding the error shape on protocol errors.
    pub fn into_result(self) -> Result<T, E> {
        if self.is_protocol_error() {
            Err(self.error)
        } else {
            Ok(self.resource)
        }
    }
}

pub(crate) fn decode_reply<T, E>(body: &[u8]) -> ScimClientResult<ScimReply<T, E>>
where
    T: DeserializeOwned + ScimDocument,
    E: DeserializeOwned + Default,
{
    let resource: T = serde_json::from_slice(body).map_err(ScimClientError::Decode)?;

    let error = if resource.is_error_message() {
        serde_json::from_slice(body).map_err(ScimClientError::Decode)?
    } else {
        E::default()
    };

    Ok(ScimReply { resource, error })
}
