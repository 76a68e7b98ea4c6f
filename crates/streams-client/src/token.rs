//! Session credentials.

use std::fmt;

use serde::Deserialize;

/// Opaque bearer credential pair returned by login.
///
/// Immutable once obtained; lives for one authenticated session and is never
/// persisted. The refresh token is carried as received but the client does
/// not rotate credentials - expiry surfaces as an auth error on the next
/// call.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_decodes_login_response() {
        let token: Token =
            serde_json::from_str(r#"{"accessToken": "at-1", "refreshToken": "rt-1"}"#).unwrap();
        assert_eq!(token.access_token, "at-1");
        assert_eq!(token.refresh_token, "rt-1");
    }

    #[test]
    fn token_debug_redacts_secrets() {
        let token: Token =
            serde_json::from_str(r#"{"accessToken": "secret-at", "refreshToken": "secret-rt"}"#)
                .unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-at"));
        assert!(!debug.contains("secret-rt"));
        assert!(debug.contains("[REDACTED]"));
    }
}
