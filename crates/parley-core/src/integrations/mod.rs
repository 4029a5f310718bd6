//! Passive data models for external services.
//!
//! These are data-shape contracts only: field names match the wire format
//! of the service exactly, and the types carry no behavior beyond thin
//! decode/verify helpers. Transport (HTTP, webhook routing) is the
//! caller's concern.

pub mod github;
pub mod stackexchange;
