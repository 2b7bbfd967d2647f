use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

use crate::dto::IdentityUpsert;

const FALLBACK_NAME: &str = "User";

/// Envelope of every identity-provider event. `data` is only interpreted for the
/// event types we act on.
#[derive(Debug, Deserialize)]
pub struct IdentityEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Deserialize)]
struct UserData {
    id: String,
    #[serde(default)]
    email_addresses: Vec<EmailAddress>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmailAddress {
    email_address: String,
}

/// What the webhook handler should do with a verified event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookAction {
    UpsertUser(IdentityUpsert),
    Ignore(String),
}

impl IdentityEvent {
    /// Parse a verified request body.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the body is not an event envelope.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Map the event onto a local action.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when a user event carries a malformed `data` object or a
    /// blank user id.
    pub fn into_action(self) -> Result<WebhookAction, serde_json::Error> {
        match self.kind.as_str() {
            "user.created" | "user.updated" => {
                let data: UserData = serde_json::from_value(self.data)?;
                if data.id.trim().is_empty() {
                    return Err(serde_json::Error::custom("user event has a blank `data.id`"));
                }
                Ok(WebhookAction::UpsertUser(data.into_upsert()))
            }
            _ => Ok(WebhookAction::Ignore(self.kind)),
        }
    }
}

impl UserData {
    fn into_upsert(self) -> IdentityUpsert {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let name = match full.trim() {
            "" => FALLBACK_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        let email = self
            .email_addresses
            .into_iter()
            .next()
            .map(|e| e.email_address)
            .unwrap_or_default();

        IdentityUpsert {
            external_id: self.id,
            email,
            name,
            avatar_url: self.image_url,
        }
    }
}
