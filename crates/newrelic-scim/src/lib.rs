//! Client for the New Relic SCIM 2.0 provisioning API.
//!
//! Every operation performs a single HTTP round trip and returns either a
//! transport/codec error or a [`ScimReply`] holding the decoded success shape
//! and, when the server answered with a SCIM error document, the decoded
//! error shape.
//!
//! ```rust,no_run
//! use newrelic_scim::models::{Email, User};
//! use newrelic_scim::ScimClient;
//!
//! # async fn run() -> newrelic_scim::ScimClientResult<()> {
//! let client = ScimClient::new("NRAK-...")?;
//! let user = User {
//!     emails: vec![Email::primary("jane@example.com")],
//!     ..User::new("jane@example.com")
//! };
//! let reply = client.create_user(user).await?;
//! if reply.is_protocol_error() {
//!     eprintln!("rejected: {}", reply.error.detail);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod groups;
pub mod models;
pub mod reply;
pub mod users;

pub use client::ScimClient;
pub use config::ClientConfig;
pub use error::{ScimClientError, ScimClientResult};
pub use groups::{GroupReply, GroupsReply};
pub use reply::ScimReply;
pub use users::{UserReply, UsersReply};
