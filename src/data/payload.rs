//! Payload Decoder Module
//! Decodes the HTML-escaped JSON payload embedded by the host page.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Entity the host templating substitutes for every double quote.
const ESCAPED_QUOTE: &str = "&quot;";

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("User '{user}' has {found} weights but there are {expected} dates")]
    LengthMismatch {
        user: String,
        expected: usize,
        found: usize,
    },
    #[error("Failed to read payload: {0}")]
    Io(#[from] std::io::Error),
}

/// Wire shape of the payload. `user_weights` stays a raw map so that the
/// key order of the document survives decoding.
#[derive(Deserialize)]
struct RawPayload {
    dates: Vec<String>,
    user_weights: Map<String, Value>,
}

/// Parsed comparison payload: one shared date axis and one weight
/// sequence per user, positionally aligned with `dates`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightDataset {
    pub dates: Vec<String>,
    pub user_weights: Vec<(String, Vec<Option<f64>>)>,
}

impl WeightDataset {
    /// Usernames in payload order.
    pub fn usernames(&self) -> Vec<&str> {
        self.user_weights
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn weights_for(&self, username: &str) -> Option<&[Option<f64>]> {
        self.user_weights
            .iter()
            .find(|(name, _)| name == username)
            .map(|(_, weights)| weights.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.user_weights.is_empty()
    }

    /// Serialize back into the escaped form the host page embeds.
    pub fn to_payload(&self) -> String {
        let user_weights: Map<String, Value> = self
            .user_weights
            .iter()
            .map(|(name, weights)| {
                let values = weights
                    .iter()
                    .map(|w| w.map(Value::from).unwrap_or(Value::Null))
                    .collect();
                (name.clone(), Value::Array(values))
            })
            .collect();

        let doc = serde_json::json!({
            "dates": self.dates,
            "user_weights": user_weights,
        });
        doc.to_string().replace('"', ESCAPED_QUOTE)
    }
}

/// Unescape and decode a payload string.
///
/// Every user's sequence must have exactly one entry per date; `null`
/// entries are kept as gaps.
pub fn decode_payload(raw: &str) -> Result<WeightDataset, PayloadError> {
    let unescaped = raw.replace(ESCAPED_QUOTE, "\"");
    let payload: RawPayload = serde_json::from_str(unescaped.trim())?;

    let expected = payload.dates.len();
    let mut user_weights = Vec::with_capacity(payload.user_weights.len());

    for (user, value) in payload.user_weights {
        let weights: Vec<Option<f64>> = serde_json::from_value(value)?;
        if weights.len() != expected {
            return Err(PayloadError::LengthMismatch {
                user,
                expected,
                found: weights.len(),
            });
        }
        user_weights.push((user, weights));
    }

    tracing::debug!(
        dates = expected,
        users = user_weights.len(),
        "decoded weight payload"
    );

    Ok(WeightDataset {
        dates: payload.dates,
        user_weights,
    })
}

/// Read a payload file and decode it.
pub fn read_payload_file(path: &std::path::Path) -> Result<WeightDataset, PayloadError> {
    let raw = std::fs::read_to_string(path)?;
    decode_payload(&raw)
}
