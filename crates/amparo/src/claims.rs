//! Identity derivation from the bearer token.
//!
//! The backend's tokens are JWTs, but the console never verifies them: it
//! only needs the subject claim out of the middle segment to know which
//! profile to fetch. Verification stays on the backend; here a token is just
//! three base64url segments with a JSON payload in the middle.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::session::Session;

/// Claims the console actually reads from the token payload.
/// Unknown claims are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<u64>,
    #[serde(default)]
    pub iat: Option<u64>,
}

impl Claims {
    /// The subject identifier used to look up the profile record.
    /// The backend puts the email in `sub`; older tokens carry it in `email`.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().or(self.email.as_deref())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("Token does not have three segments")]
    MissingSegment,
    #[error("Token payload is not valid base64url: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Token payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Decodes the payload segment of a bearer token.
///
/// Returns a tagged error instead of swallowing decode failures, so callers
/// that care (diagnostics, tests) can tell a truncated token from a corrupt
/// payload. Callers that don't care go through [`current_identity`].
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(ClaimsError::MissingSegment),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    let claims = serde_json::from_slice(&bytes)?;
    Ok(claims)
}

/// The subject of the current session, or `None` if there is no usable token.
///
/// Fails soft by design: an absent, unreadable, or malformed token all mean
/// "nobody is logged in" as far as the caller is concerned.
pub fn current_identity(session: &dyn Session) -> Option<String> {
    let token = session.token().ok().flatten()?;
    let claims = decode_claims(&token).ok()?;
    claims.subject().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;

    fn token_with_payload(payload: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_decode_valid_token() {
        let token = token_with_payload(r#"{"sub":"ana@amparo.org","exp":1700000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.subject(), Some("ana@amparo.org"));
        assert_eq!(claims.exp, Some(1700000000));
    }

    #[test]
    fn test_subject_falls_back_to_email_claim() {
        let token = token_with_payload(r#"{"email":"luis@amparo.org"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.subject(), Some("luis@amparo.org"));
    }

    #[test]
    fn test_missing_segment() {
        assert!(matches!(
            decode_claims("not-a-jwt"),
            Err(ClaimsError::MissingSegment)
        ));
        assert!(matches!(
            decode_claims("only.two"),
            Err(ClaimsError::MissingSegment)
        ));
        assert!(matches!(
            decode_claims("a.b.c.d"),
            Err(ClaimsError::MissingSegment)
        ));
        assert!(matches!(decode_claims(""), Err(ClaimsError::MissingSegment)));
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(
            decode_claims("header.!!not-base64!!.signature"),
            Err(ClaimsError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        let token = format!("header.{}.signature", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(
            decode_claims(&token),
            Err(ClaimsError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_current_identity_with_valid_token() {
        let session = MemorySession::with_token(&token_with_payload(r#"{"sub":"ana@amparo.org"}"#));
        assert_eq!(
            current_identity(&session),
            Some("ana@amparo.org".to_string())
        );
    }

    #[test]
    fn test_current_identity_without_token() {
        let session = MemorySession::new();
        assert_eq!(current_identity(&session), None);
    }

    #[test]
    fn test_current_identity_never_errors_on_garbage() {
        for garbage in ["", "x", "a.b", "a.!!.c", "a.b.c.d"] {
            let session = MemorySession::with_token(garbage);
            assert_eq!(current_identity(&session), None, "token: {garbage:?}");
        }
    }

    #[test]
    fn test_current_identity_none_when_payload_has_no_subject() {
        let session = MemorySession::with_token(&token_with_payload(r#"{"exp":1}"#));
        assert_eq!(current_identity(&session), None);
    }
}
