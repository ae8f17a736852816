//! The authenticated HTTP client the whole console goes through.
//!
//! One shared client per page tree: a fixed base URL, JSON in and out, and two
//! interception points. Outbound, the session token is attached as a bearer
//! header; if the token store itself cannot be read the request is aborted
//! (fail closed) rather than sent unauthenticated. Inbound, a 403 is treated
//! as "the session died": the token is cleared and the page is sent to the
//! login route. A 401 is only logged and rejected, so callers can tell "not
//! logged in yet" from "session revoked".
//!
//! There is no retry, no backoff, and no replay after re-authentication. The
//! console is a low-traffic internal tool and the backend is the final
//! arbiter; a failed request surfaces as an error string on the page.

use std::collections::HashMap;
use std::rc::Rc;

use gloo_net::http::Response;

use crate::session::{LOGIN_ROUTE, Session};

#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Unauthorized Access")]
    Unauthorized,
    #[error("Forbidden Access")]
    Forbidden,
    #[error("Network error: {0}")]
    Network(gloo_net::Error),
    #[error("Parse error: {0}")]
    Parse(gloo_net::Error),
    #[error("Serialize error: {0}")]
    Serialize(gloo_net::Error),
    #[error("Session error: {0}")]
    Session(#[from] crate::session::SessionError),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn delete(&mut self, key: &str) {
        self.0.remove(key);
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// Response interceptor: maps a status to the outcome every caller sees.
///
/// 403 is the only status with a side effect. The backend returns it when the
/// token has expired or been invalidated far more often than for a genuine
/// per-resource permission gap, so the client clears the session and forces a
/// navigation to the login route before rejecting.
fn intercept_status(status: u16, endpoint: &str, session: &dyn Session) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        400 => Err(ApiError::BadRequest(format!("Bad request to {endpoint}"))),
        401 => {
            tracing::warn!(endpoint, "request rejected as unauthenticated");
            Err(ApiError::Unauthorized)
        }
        403 => {
            tracing::warn!(endpoint, "session invalidated by backend, forcing re-login");
            session.clear();
            session.redirect(LOGIN_ROUTE);
            Err(ApiError::Forbidden)
        }
        404 => Err(ApiError::NotFound(format!("{endpoint} not found"))),
        500..=599 => Err(ApiError::InternalServerError),
        status => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn handle_json_response<T>(
    response: Response,
    endpoint: &str,
    session: &dyn Session,
) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    intercept_status(response.status(), endpoint, session)?;
    response.json::<T>().await.map_err(ApiError::Parse)
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    // Core request methods
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response>;

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize;

    // HTTP method implementations
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;

    async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;

    async fn delete(&self, endpoint: &str) -> ApiResult<()>;
}

pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
    session: Rc<dyn Session>,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>, session: Rc<dyn Session>) -> Self {
        let mut headers = ApiHeaders::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            root_url: root_url.into(),
            headers,
            session,
        }
    }

    pub fn set_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }

    /// Request interceptor: the default headers plus the bearer token.
    ///
    /// A session read error aborts the request. No token at all is fine; the
    /// request goes out unauthenticated and the backend answers 401 if the
    /// endpoint needed one.
    fn authorized_headers(&self) -> ApiResult<ApiHeaders> {
        let mut headers = self.headers.clone();
        if let Some(token) = self.session.token()? {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        Ok(headers)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response> {
        let url = format!("{}{}", self.root_url, endpoint);

        let request = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
            _ => return Err(ApiError::UnexpectedStatusCode(405)), // Method not allowed for this function
        };

        request
            .headers(self.authorized_headers()?.into())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(ApiError::Network)
    }

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.root_url, endpoint);

        let request = match method {
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            HttpMethod::Put => gloo_net::http::Request::put(&url),
            _ => return Err(ApiError::UnexpectedStatusCode(405)), // Method not allowed for this function
        };

        request
            .headers(self.authorized_headers()?.into())
            .credentials(web_sys::RequestCredentials::Include)
            .json(body)
            .map_err(ApiError::Serialize)?
            .send()
            .await
            .map_err(ApiError::Network)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint).await?;
        handle_json_response(response, endpoint, self.session.as_ref()).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        handle_json_response(response, endpoint, self.session.as_ref()).await
    }

    async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Put, endpoint, body)
            .await?;
        handle_json_response(response, endpoint, self.session.as_ref()).await
    }

    async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        let response = self.make_request(HttpMethod::Delete, endpoint).await?;
        // Delete responses have no body worth parsing.
        intercept_status(response.status(), endpoint, self.session.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySession, SessionError};

    /// Session whose storage cannot be read at all.
    struct BrokenSession;

    impl Session for BrokenSession {
        fn token(&self) -> Result<Option<String>, SessionError> {
            Err(SessionError::StorageUnavailable)
        }
        fn store(&self, _token: &str) {}
        fn clear(&self) {}
        fn redirect(&self, _target: &str) {}
    }

    #[test]
    fn test_bearer_header_attached_when_token_present() {
        let session = Rc::new(MemorySession::with_token("tok-123"));
        let client = HttpApiClient::new("http://localhost:3030/api/v1", session);

        let headers = client.authorized_headers().unwrap();
        assert_eq!(headers.get("Authorization"), Some("Bearer tok-123"));
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_no_bearer_header_without_token() {
        let session = Rc::new(MemorySession::new());
        let client = HttpApiClient::new("http://localhost:3030/api/v1", session);

        let headers = client.authorized_headers().unwrap();
        assert_eq!(headers.get("Authorization"), None);
    }

    #[test]
    fn test_unreadable_session_aborts_the_request() {
        let client = HttpApiClient::new("http://localhost:3030/api/v1", Rc::new(BrokenSession));
        assert!(matches!(
            client.authorized_headers(),
            Err(ApiError::Session(_))
        ));
    }

    #[test]
    fn test_success_statuses_pass_through() {
        let session = MemorySession::with_token("tok");
        for status in [200, 201, 204] {
            assert!(intercept_status(status, "/centers", &session).is_ok());
        }
        assert_eq!(session.token().unwrap(), Some("tok".to_string()));
        assert!(session.redirects().is_empty());
    }

    #[test]
    fn test_401_rejects_without_touching_the_session() {
        let session = MemorySession::with_token("tok");
        let result = intercept_status(401, "/centers", &session);

        assert!(matches!(result, Err(ApiError::Unauthorized)));
        assert_eq!(session.token().unwrap(), Some("tok".to_string()));
        assert!(session.redirects().is_empty());
    }

    #[test]
    fn test_403_clears_session_and_navigates_to_login_once() {
        let session = MemorySession::with_token("tok");
        let result = intercept_status(403, "/centers/9", &session);

        assert!(matches!(result, Err(ApiError::Forbidden)));
        assert_eq!(session.token().unwrap(), None);
        assert_eq!(session.redirects(), vec!["/login"]);
    }

    #[test]
    fn test_other_error_statuses_map_without_side_effects() {
        let session = MemorySession::with_token("tok");

        assert!(matches!(
            intercept_status(400, "/centers", &session),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            intercept_status(404, "/centers/1", &session),
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            intercept_status(503, "/centers", &session),
            Err(ApiError::InternalServerError)
        ));
        assert!(matches!(
            intercept_status(418, "/centers", &session),
            Err(ApiError::UnexpectedStatusCode(418))
        ));

        assert_eq!(session.token().unwrap(), Some("tok".to_string()));
        assert!(session.redirects().is_empty());
    }
}
