//! # Session: what the client knows about the signed-in admin
//!
//! The backend issues a JWT from `/userlogin`. The dashboard never verifies the
//! signature (that is the server's job on every request); it only decodes the
//! payload to learn whether a token is present, whether it has expired, and
//! which admin it belongs to.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Claims`] | Payload fields the dashboard reads (`sub`, `exp`, `iat`, `adminId`, `email`, `name`). Unknown fields are ignored. |
//! | [`Session`] | A raw token together with its decoded [`Claims`]. |
//! | [`Session::from_store`] | Loads the token from a [`TokenStore`], dropping it if it cannot be decoded or has expired. |
//! | [`now`] | Current Unix time in seconds (works on WASM through chrono's `wasmbind`). |

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::token::TokenStore;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not valid claims JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decoded JWT payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<Value>,
    /// Expiry, Unix seconds.
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued-at, Unix seconds.
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default, alias = "adminId")]
    pub admin_id: Option<Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A bearer token and the claims decoded from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

impl Session {
    /// Decode the payload segment of a JWT. The signature is not checked.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let mut parts = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed);
        };
        if payload.is_empty() {
            return Err(TokenError::Malformed);
        }

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        let claims: Claims = serde_json::from_slice(&bytes)?;
        Ok(Self {
            token: token.to_string(),
            claims,
        })
    }

    /// A token without `exp` never expires on the client side.
    pub fn is_expired(&self, now: i64) -> bool {
        self.claims.exp.is_some_and(|exp| exp <= now)
    }

    /// Load, decode and validate the stored token.
    ///
    /// Undecodable or expired tokens are removed from the store so the next
    /// request does not send them.
    pub fn from_store(store: &dyn TokenStore, now: i64) -> Option<Self> {
        let token = store.get()?;
        match Self::decode(&token) {
            Ok(session) if session.is_expired(now) => {
                tracing::info!("stored token expired; clearing");
                store.clear();
                None
            }
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("discarding invalid token: {e}");
                store.clear();
                None
            }
        }
    }

    /// Identifier used by `/fetchuserprofile`. Falls back to `sub`.
    pub fn admin_id(&self) -> Option<String> {
        self.claims
            .admin_id
            .as_ref()
            .or(self.claims.sub.as_ref())
            .and_then(value_to_id)
    }

    /// Name or email to greet the admin with.
    pub fn display_name(&self) -> &str {
        self.claims
            .name
            .as_deref()
            .or(self.claims.email.as_deref())
            .unwrap_or("Admin")
    }
}

fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Current Unix time in seconds.
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_claims() {
        let token = make_token(r#"{"sub":"42","exp":2000,"iat":1000,"adminId":7,"email":"a@b.co"}"#);
        let session = Session::decode(&token).unwrap();
        assert_eq!(session.claims.exp, Some(2000));
        assert_eq!(session.claims.iat, Some(1000));
        assert_eq!(session.admin_id().as_deref(), Some("7"));
        assert_eq!(session.display_name(), "a@b.co");
        assert_eq!(session.token, token);
    }

    #[test]
    fn admin_id_falls_back_to_sub() {
        let session = Session::decode(&make_token(r#"{"sub":"19"}"#)).unwrap();
        assert_eq!(session.admin_id().as_deref(), Some("19"));
    }

    #[test]
    fn rejects_non_jwt() {
        assert!(matches!(Session::decode("not-a-token"), Err(TokenError::Malformed)));
        assert!(matches!(Session::decode("a..c"), Err(TokenError::Malformed)));
        assert!(matches!(Session::decode("a.b.c.d"), Err(TokenError::Malformed)));
        assert!(matches!(Session::decode("a.!!!.c"), Err(TokenError::Base64(_))));
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(Session::decode(&not_json), Err(TokenError::Claims(_))));
    }

    #[test]
    fn expiry_is_inclusive() {
        let session = Session::decode(&make_token(r#"{"exp":100}"#)).unwrap();
        assert!(!session.is_expired(99));
        assert!(session.is_expired(100));
        assert!(session.is_expired(101));

        let forever = Session::decode(&make_token(r#"{"sub":"1"}"#)).unwrap();
        assert!(!forever.is_expired(i64::MAX));
    }

    #[test]
    fn from_store_clears_expired_token() {
        let store = MemoryStore::with_token(make_token(r#"{"exp":100}"#));
        assert!(Session::from_store(&store, 200).is_none());
        assert!(store.get().is_none());
    }

    #[test]
    fn from_store_clears_garbage_token() {
        let store = MemoryStore::with_token("garbage");
        assert!(Session::from_store(&store, 0).is_none());
        assert!(store.get().is_none());
    }

    #[test]
    fn from_store_keeps_valid_token() {
        let token = make_token(r#"{"exp":300}"#);
        let store = MemoryStore::with_token(token.clone());
        let session = Session::from_store(&store, 200).unwrap();
        assert_eq!(session.token, token);
        assert_eq!(store.get(), Some(token));
    }

    #[test]
    fn empty_store_has_no_session() {
        assert!(Session::from_store(&MemoryStore::new(), 0).is_none());
    }
}
