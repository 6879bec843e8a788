//! Bearer token payload decoding
//!
//! Tokens are decoded without verifying their signature: the client only needs
//! the claims to decide whether a stored session is still usable. The server
//! remains the authority on whether a token is accepted.

use crate::role::Role;
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Standard alphabet, padding optional, lenient about trailing bits
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Claims carried in a token payload
///
/// Decoding never fails on the shape of a single claim: a claim of an
/// unexpected type is dropped and the rest of the payload is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Claims {
    /// Subject (username); numeric subjects are kept as their decimal text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiration time in seconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued-at time in seconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Role claim, falling back to the `authorities` claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Any other claims in the payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Claims {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_map)
    }
}

impl Claims {
    /// Whether the token has expired at `now` (seconds since the epoch)
    ///
    /// A token without an `exp` claim never expires on the client side.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| now >= exp)
    }

    /// Whether the token has expired at the current wall-clock time
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }

    pub const fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Pick the known claims out of a payload object
    pub fn from_map(mut payload: Map<String, Value>) -> Self {
        let sub = payload.remove("sub").and_then(lenient_subject);
        let exp = payload.remove("exp").and_then(lenient_timestamp);
        let iat = payload.remove("iat").and_then(lenient_timestamp);
        let role = payload
            .remove("role")
            .and_then(lenient_role)
            .or_else(|| payload.remove("authorities").and_then(lenient_role));

        Self {
            sub,
            exp,
            iat,
            role,
            extra: payload,
        }
    }
}

/// Reasons a token payload could not be decoded
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Expected 3 token segments, found {0}")]
    Segments(usize),

    #[error("Payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Payload is not a valid claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the claims of a `header.payload.signature` token
pub fn try_decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(TokenError::Segments(segments.len()));
    };

    let standard: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE.decode(standard)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// Decode the claims of a token, returning `None` for anything malformed
pub fn decode_claims(token: &str) -> Option<Claims> {
    match try_decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!(error = %e, "Discarding undecodable token");
            None
        }
    }
}

fn lenient_subject(value: Value) -> Option<String> {
    match value {
        Value::String(sub) => Some(sub),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Accepts integer or floating point timestamps; anything else is ignored
#[allow(clippy::cast_possible_truncation)]
fn lenient_timestamp(value: Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

/// Accepts `"ROLE_X"`, `["ROLE_X", ...]` or `[{"authority": "ROLE_X"}, ...]`
///
/// When a list is given, admin wins over any other entry.
fn lenient_role(value: Value) -> Option<Role> {
    match value {
        Value::String(name) => Some(Role::from(name)),
        Value::Array(items) => {
            let roles: Vec<Role> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name.as_str()),
                    Value::Object(map) => map.get("authority").and_then(Value::as_str),
                    _ => None,
                })
                .map(Role::from)
                .collect();
            roles
                .iter()
                .find(|role| role.is_admin())
                .or_else(|| roles.first())
                .cloned()
        }
        _ => None,
    }
}
