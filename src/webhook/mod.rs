//! Inbound identity-provider webhooks: signature verification and event mapping.

pub mod event;
pub mod signature;

pub use event::{IdentityEvent, WebhookAction};
pub use signature::{SignatureError, verify};

/// Message id header.
pub const HEADER_ID: &str = "svix-id";
/// Unix-seconds timestamp header.
pub const HEADER_TIMESTAMP: &str = "svix-timestamp";
/// Space-separated `v1,<base64>` signature list.
pub const HEADER_SIGNATURE: &str = "svix-signature";
