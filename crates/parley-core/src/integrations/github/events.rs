//! Webhook event payloads.

use serde::{Deserialize, Serialize};

use super::models::{Issue, Release, Repository, Sender};

/// Triggered when a user forks a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForkEvent {
    /// The created repository.
    pub forkee: Repository,
    pub repository: Repository,
    pub sender: Sender,
}

impl ForkEvent {
    /// The name of the webhook event for this payload.
    pub const WEBHOOK_EVENT_NAME: &'static str = "fork";
}

/// Triggered when an issue is assigned, unassigned, labeled, unlabeled,
/// opened, closed, or reopened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuesEvent {
    /// The action that was performed: "assigned", "unassigned", "labeled",
    /// "unlabeled", "opened", "closed", or "reopened".
    pub action: String,
    pub issue: Issue,
    pub repository: Repository,
    pub sender: Sender,
}

impl IssuesEvent {
    /// The name of the webhook event for this payload.
    pub const WEBHOOK_EVENT_NAME: &'static str = "issues";
}

/// Triggered when a release is published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseEvent {
    pub action: String,
    pub release: Release,
    pub repository: Repository,
    pub sender: Sender,
}

impl ReleaseEvent {
    /// The name of the webhook event for this payload.
    pub const WEBHOOK_EVENT_NAME: &'static str = "release";
}
