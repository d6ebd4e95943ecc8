//! Middleware-composed HTTP client for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every service call goes through `ApiClient::send`. The client joins the
//! path onto the base address, applies the default JSON content type, runs
//! the request side of each middleware, hands the request to a `Transport`,
//! then runs the response side of each middleware before mapping the status
//! to a result.
//!
//! DESIGN
//! ======
//! Request transforms run in registration order and response handlers in
//! reverse order, so the first middleware registered is the outermost layer.
//! Response handlers observe responses only; a transport failure never
//! reaches them and is returned to the caller unchanged.
//!
//! ERROR HANDLING
//! ==============
//! No retries. 401 becomes `ApiError::Unauthorized` after the middleware has
//! had its chance to react; any other non-2xx becomes `ApiError::Status`.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{API_BASE_URL, JSON_CONTENT_TYPE};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound request after path resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base address, e.g. `/Items/5`.
    pub path: String,
    /// Absolute URL handed to the transport.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a header, replacing any existing value under the same name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// The raw request/response capability underneath the client.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// One layer around the transport call.
pub trait Middleware: Send + Sync {
    /// Transform the request before dispatch.
    fn on_request(&self, _request: &mut ApiRequest) {}

    /// Observe a response before it is mapped to a result.
    fn on_response(&self, _request: &ApiRequest, _response: &ApiResponse) {}
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl ApiClient {
    pub fn builder(transport: Arc<dyn Transport>) -> ApiClientBuilder {
        ApiClientBuilder { base_url: API_BASE_URL.to_owned(), transport, middleware: Vec::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base address with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Run one request through the middleware stack and the transport.
    pub async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<ApiResponse, ApiError> {
        let mut request = ApiRequest {
            method,
            path: path.to_owned(),
            url: self.url(path),
            headers: vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())],
            body,
        };
        for layer in &self.middleware {
            layer.on_request(&mut request);
        }

        let response = self.transport.send(request.clone()).await?;
        for layer in self.middleware.iter().rev() {
            layer.on_response(&request, &response);
        }

        if response.is_success() {
            Ok(response)
        } else if response.is_unauthorized() {
            Err(ApiError::Unauthorized)
        } else {
            Err(ApiError::Status { status: response.status, body: response.body })
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path, None).await?;
        decode(&response)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::Post, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    /// `PUT` whose 2xx response may carry no body (`204 No Content`, or an
    /// empty `200`). An empty body yields `None`; anything else must decode.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::Put, path, Some(encode(body)?)).await?;
        decode_opt(&response)
    }

    /// `PUT` whose response body is ignored.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::Put, path, Some(encode(body)?)).await?;
        Ok(())
    }

    /// `DELETE` whose response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await?;
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("middleware", &self.middleware.len())
            .finish_non_exhaustive()
    }
}

pub struct ApiClientBuilder {
    base_url: String,
    transport: Arc<dyn Transport>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl ApiClientBuilder {
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Append a middleware layer; earlier layers wrap later ones.
    #[must_use]
    pub fn layer(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> ApiClient {
        ApiClient { base_url: self.base_url, transport: self.transport, middleware: self.middleware }
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() { base.to_owned() } else { format!("{base}/{path}") }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(ApiError::Encode)
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

fn decode_opt<T: DeserializeOwned>(response: &ApiResponse) -> Result<Option<T>, ApiError> {
    if response.body.trim().is_empty() {
        return Ok(None);
    }
    decode(response).map(Some)
}
