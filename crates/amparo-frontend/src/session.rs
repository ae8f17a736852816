//! Browser-backed session: the `token` cookie plus hard navigation.

use amparo::session::{Session, SessionError, TOKEN_COOKIE};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// [`Session`] implementation over `document.cookie` and `window.location`.
///
/// The login flow stores the bearer token here and every request reads it
/// back. Reads are non-atomic across in-flight requests; a logout racing a
/// request can still send a stale token, which the backend answers with
/// 401/403.
pub struct BrowserSession;

fn html_document() -> Result<HtmlDocument, SessionError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .ok_or(SessionError::StorageUnavailable)
}

/// Finds `name` in a `document.cookie` string (`"a=1; b=2"`).
fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

impl Session for BrowserSession {
    fn token(&self) -> Result<Option<String>, SessionError> {
        let cookies = html_document()?
            .cookie()
            .map_err(|_| SessionError::ReadFailed("document.cookie".to_string()))?;
        Ok(read_cookie(&cookies, TOKEN_COOKIE))
    }

    fn store(&self, token: &str) {
        if let Ok(document) = html_document() {
            let _ = document.set_cookie(&format!("{TOKEN_COOKIE}={token}; path=/"));
        }
    }

    fn clear(&self) {
        if let Ok(document) = html_document() {
            let _ = document.set_cookie(&format!("{TOKEN_COOKIE}=; Max-Age=0; path=/"));
        }
    }

    fn redirect(&self, target: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie_finds_token() {
        assert_eq!(
            read_cookie("theme=dark; token=abc.def.ghi; lang=es", "token"),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_read_cookie_single_pair() {
        assert_eq!(read_cookie("token=abc", "token"), Some("abc".to_string()));
    }

    #[test]
    fn test_read_cookie_missing() {
        assert_eq!(read_cookie("theme=dark; lang=es", "token"), None);
        assert_eq!(read_cookie("", "token"), None);
    }

    #[test]
    fn test_read_cookie_does_not_match_prefixes() {
        assert_eq!(read_cookie("token2=xyz", "token"), None);
    }

    #[test]
    fn test_read_cookie_keeps_equals_in_value() {
        assert_eq!(
            read_cookie("token=abc==; lang=es", "token"),
            Some("abc==".to_string())
        );
    }
}
