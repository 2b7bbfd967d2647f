use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Maximum clock skew accepted between the sender's timestamp and now.
pub const TOLERANCE_SECS: i64 = 5 * 60;

const SECRET_PREFIX: &str = "whsec_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The configured secret is not valid base64. This is a server problem.
    InvalidSecret,
    InvalidTimestamp,
    TimestampOutOfTolerance,
    NoMatchingSignature,
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSecret => f.write_str("webhook secret is not valid base64"),
            Self::InvalidTimestamp => f.write_str("webhook timestamp is not a unix time"),
            Self::TimestampOutOfTolerance => f.write_str("webhook timestamp outside tolerance"),
            Self::NoMatchingSignature => f.write_str("no matching webhook signature"),
        }
    }
}

impl std::error::Error for SignatureError {}

/// Verify a signed webhook delivery.
///
/// The signed content is `"{id}.{timestamp}.{body}"`, keyed with the base64-decoded
/// secret (an optional `whsec_` prefix is stripped). Any `v1` entry in the signature
/// header matching the computed digest is accepted.
///
/// # Errors
///
/// Returns a [`SignatureError`] describing why the delivery was rejected.
pub fn verify(
    secret: &str,
    id: &str,
    timestamp: &str,
    signature_header: &str,
    body: &[u8],
    now: DateTime<Utc>,
) -> Result<(), SignatureError> {
    let key = STANDARD
        .decode(secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret))
        .map_err(|_| SignatureError::InvalidSecret)?;

    let sent_at: i64 = timestamp
        .trim()
        .parse()
        .map_err(|_| SignatureError::InvalidTimestamp)?;
    if (now.timestamp() - sent_at).abs() > TOLERANCE_SECS {
        return Err(SignatureError::TimestampOutOfTolerance);
    }

    let mut mac = HmacSha256::new_from_slice(&key).map_err(|_| SignatureError::InvalidSecret)?;
    mac.update(id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);

    let matched = signature_header
        .split_whitespace()
        .filter_map(|entry| entry.split_once(','))
        .filter(|(version, _)| *version == "v1")
        .filter_map(|(_, sig)| STANDARD.decode(sig).ok())
        .any(|sig| mac.clone().verify_slice(&sig).is_ok());

    if matched {
        Ok(())
    } else {
        Err(SignatureError::NoMatchingSignature)
    }
}
