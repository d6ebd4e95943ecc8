//! Concrete `Transport` implementations.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: a stub that fails every request, since the API is only
//! reachable from the browser build.

#![allow(clippy::unused_async)]

use std::sync::Arc;

use async_trait::async_trait;

use super::http::{ApiError, ApiRequest, ApiResponse, Transport};

/// `fetch`-backed transport.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use super::http::Method;
        use gloo_net::http::{Method as FetchMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => FetchMethod::GET,
            Method::Post => FetchMethod::POST,
            Method::Put => FetchMethod::PUT,
            Method::Delete => FetchMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let outbound = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = outbound.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// Transport for builds without a browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTransport;

#[async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        Err(ApiError::Transport(format!("{} {}: not available outside the browser", request.method, request.url)))
    }
}

/// Transport for the current build target.
pub fn default_transport() -> Arc<dyn Transport> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserTransport)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(UnavailableTransport)
    }
}
