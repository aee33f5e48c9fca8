pub mod session;

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

pub use session::SessionHandler;

/// Claims the console reads out of a bearer token
///
/// The backend issues `sub` as a string holding the numeric user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Value,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn subject(&self) -> Result<i64, ClientError> {
        match &self.sub {
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ClientError::MalformedToken(format!("sub claim is not numeric: {:?}", s))),
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| ClientError::MalformedToken(format!("sub claim is not an integer: {}", n))),
            other => Err(ClientError::MalformedToken(format!("unsupported sub claim: {}", other))),
        }
    }

    /// Expired relative to `now` (unix seconds); tokens without `exp` never expire
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.map(|exp| exp <= now).unwrap_or(false)
    }
}

/// Decode the payload segment of a three-part token without verifying it
///
/// Only the middle segment is read; the header and signature are left to the
/// server, which rejects forged tokens on every request.
pub fn decode_claims(token: &str) -> Result<Claims, ClientError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(ClientError::MalformedToken("expected three dot-separated segments".to_string()));
    }

    let payload = general_purpose::URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    serde_json::from_slice::<Claims>(&payload)
        .map_err(|e| ClientError::MalformedToken(format!("payload is not a claims object: {}", e)))
}

/// Numeric `sub` claim of a bearer token
pub fn decode_token_subject(token: &str) -> Result<i64, ClientError> {
    decode_claims(token)?.subject()
}
