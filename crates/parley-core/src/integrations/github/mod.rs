//! GitHub webhook payload models.
//!
//! One struct per webhook event, with serde field names matching the
//! payload GitHub sends. Each event type carries its `X-GitHub-Event`
//! header value as `WEBHOOK_EVENT_NAME`.

pub mod events;
pub mod models;

pub use events::{ForkEvent, IssuesEvent, ReleaseEvent};
pub use models::{Issue, Release, Repository, Sender};

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Decode a webhook payload body into the given event type.
pub fn decode_event<T: DeserializeOwned>(payload: &str) -> Result<T> {
    Ok(serde_json::from_str(payload)?)
}
