//! # HTTP client
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the two behaviours every
//! authenticated call needs:
//!
//! - **Outbound**: when the [`TokenStore`] holds a token, the request carries
//!   `Authorization: Bearer <token>`.
//! - **Inbound**: a `401` clears the stored token and surfaces as
//!   [`ApiError::Unauthorized`]; the UI reacts by sending the admin to the
//!   login page. Other non-2xx answers become [`ApiError::Status`] with the
//!   body's `message` when it has one.
//!
//! Successful bodies are read as an [`Envelope`]. An envelope with
//! `status: false` is a refusal even though the HTTP status was 2xx.
//!
//! The public auth endpoints (`/userlogin`, `/sendOTP`, ...) go through
//! [`ApiClient::public`] instead: no bearer header, and a `401` there means
//! "wrong credentials", not "session expired".
//!
//! Endpoint methods live in their own modules as further `impl ApiClient`
//! blocks.

use std::rc::Rc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{DashboardConfig, TokenStore};

use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// `{ status?, message?, error?, data? }`, the shape of every backend answer.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    fn empty() -> Self {
        Self {
            status: None,
            message: None,
            error: None,
            data: None,
        }
    }

    /// Turn `status: false` into [`ApiError::Rejected`].
    pub fn accepted(self) -> ApiResult<Self> {
        if self.status == Some(false) {
            Err(ApiError::Rejected(self.message.or(self.error)))
        } else {
            Ok(self)
        }
    }
}

/// Typed REST client shared through the UI context.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Rc<str>,
    tokens: Rc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            http: build_http(config.api.timeout_secs),
            base_url: config.api_base().into(),
            tokens,
        }
    }

    pub fn with_base_url(base_url: &str, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').into(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticated request: bearer header when a token is stored.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{method} {url}");
        let req = self.http.request(method, url);
        match self.tokens.get() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Unauthenticated request for the sign-in and password reset endpoints.
    pub(crate) fn public(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{method} {url} (public)");
        self.http.request(method, url)
    }

    async fn send(&self, req: RequestBuilder) -> ApiResult<String> {
        self.finish(req, true).await
    }

    pub(crate) async fn send_public(&self, req: RequestBuilder) -> ApiResult<String> {
        self.finish(req, false).await
    }

    async fn finish(&self, req: RequestBuilder, intercept: bool) -> ApiResult<String> {
        let resp = req.send().await.map_err(|e| {
            tracing::error!("request failed: {e}");
            ApiError::Network(e)
        })?;
        let status = resp.status();

        if intercept && status == StatusCode::UNAUTHORIZED {
            tracing::warn!("unauthorized response; clearing stored token");
            self.tokens.clear();
            return Err(ApiError::Unauthorized);
        }

        let body = resp.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<Value>>(&body)
                .ok()
                .and_then(|e| e.message.or(e.error));
            tracing::error!(
                status = status.as_u16(),
                "request failed: {}",
                message.as_deref().unwrap_or("no message")
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }

    async fn envelope<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<Envelope<T>> {
        let body = self.send(req).await?;
        parse_envelope(&body)?.accepted()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<T>> {
        self.envelope(self.request(Method::GET, path)).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.envelope(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.envelope(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.envelope(self.request(Method::PUT, path).json(body)).await
    }

    /// DELETE with a JSON body; the backend reads ids from the body.
    pub async fn delete<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.envelope(self.request(Method::DELETE, path).json(body)).await
    }

    /// GET a list from `data`. Anything other than an array is an empty list.
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let envelope: Envelope<Value> = self.get(path).await?;
        match envelope.data {
            Some(Value::Array(items)) => Ok(serde_json::from_value(Value::Array(items))?),
            other => {
                tracing::debug!("{path}: expected a list, got {other:?}");
                Ok(Vec::new())
            }
        }
    }
}

/// A 2xx with an empty body is an empty envelope.
pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &str) -> ApiResult<Envelope<T>> {
    if body.trim().is_empty() {
        return Ok(Envelope::empty());
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("falling back to default HTTP client: {e}");
            reqwest::Client::new()
        })
}

// The browser fetch API owns timeouts on wasm.
#[cfg(target_arch = "wasm32")]
fn build_http(_timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;
    use store::MemoryStore;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    /// A client pointed at `server` plus a handle on its token slot.
    pub(crate) fn client_for(server: &MockServer, token: Option<&str>) -> (ApiClient, MemoryStore) {
        let store = match token {
            Some(t) => MemoryStore::with_token(t),
            None => MemoryStore::new(),
        };
        let api = ApiClient::with_base_url(&server.uri(), Rc::new(store.clone()));
        (api, store)
    }

    #[tokio::test]
    async fn attaches_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetchClient"))
            .and(header("authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true, "data": [1, 2]})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("abc"));
        let items: Vec<i64> = api.list("/fetchClient").await.unwrap();
        assert_eq!(items, vec![1, 2]);
    }

    #[tokio::test]
    async fn no_token_means_no_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(|req: &Request| !req.headers.contains_key("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, None);
        let items: Vec<Value> = api.list("/fetchproducts").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn unauthorized_clears_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
            .mount(&server)
            .await;

        let (api, store) = client_for(&server, Some("stale"));
        let err = api.list::<Value>("/fetchEnquiry").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn error_status_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({"message": "Email already exists"})))
            .mount(&server)
            .await;

        let (api, store) = client_for(&server, Some("abc"));
        let err = api.post::<Value, _>("/createclients", &json!({})).await.unwrap_err();
        match err {
            ApiError::Status { status, ref message } => {
                assert_eq!(status, 409);
                assert_eq!(message.as_deref(), Some("Email already exists"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.get().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn status_false_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status": false, "message": "Duplicate product"})),
            )
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, None);
        let err = api.put::<Value, _>("/updateproducts", &json!({})).await.unwrap_err();
        assert_eq!(err.user_message("Failed to update product"), "Duplicate product");
    }

    #[tokio::test]
    async fn empty_success_body_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, None);
        let envelope = api.delete::<Value, _>("/deleteproduct", &json!({"product_Id": 1})).await.unwrap();
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn non_array_data_is_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true, "data": {"oops": 1}})))
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, None);
        let items: Vec<Value> = api.list("/fetchpackage/all").await.unwrap();
        assert!(items.is_empty());
    }
}
