//! Shared GitHub payload objects referenced by the webhook events.
//!
//! A lean subset of the fields GitHub sends; unknown fields are ignored on
//! deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as embedded in webhook payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

/// The account that triggered an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub site_admin: bool,
}

/// An issue as embedded in `issues` event payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub state: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A release as embedded in `release` event payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub html_url: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}
