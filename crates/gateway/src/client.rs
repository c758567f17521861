// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reqwest-backed forwarding to the server.
//!
//! The client owns transport details only. It forwards the method, path,
//! query string, caller identity header and body as received, and hands
//! back the server's status and body untouched.

use std::time::Duration;

use axum::{
    body::Bytes,
    http::{
        HeaderMap, HeaderValue, Method, StatusCode, Uri,
        header::{ACCEPT, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use reqwest::{Client, Url};
use shareit_api::USER_ID_HEADER;
use tracing::{debug, info};

use crate::error::GatewayError;

/// A reply received from the server.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response: Response = (self.status, self.body).into_response();
        match self.content_type {
            Some(content_type) => {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            None => {
                response.headers_mut().remove(CONTENT_TYPE);
            }
        }
        response
    }
}

/// Forwards validated requests to one server base URL.
pub struct UpstreamClient {
    client: Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Builds a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client: Client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Forwards one request.
    ///
    /// The body is sent as JSON when non-empty.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Upstream` if the server cannot be reached or
    /// the reply cannot be read.
    pub async fn forward(
        &self,
        method: Method,
        uri: &Uri,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<UpstreamResponse, GatewayError> {
        let path_and_query: &str = uri.path_and_query().map_or("/", |pq| pq.as_str());
        let url: Url = self
            .base_url
            .join(path_and_query)
            .map_err(|e| GatewayError::UpstreamUrl(e.to_string()))?;

        info!(%method, path = uri.path(), "Forwarding request");
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(user_id) = headers.get(USER_ID_HEADER) {
            request = request.header(USER_ID_HEADER, user_id.clone());
        }
        if !body.is_empty() {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response: reqwest::Response = request.send().await?;
        let status: StatusCode = response.status();
        let content_type: Option<HeaderValue> = response.headers().get(CONTENT_TYPE).cloned();
        let body: Bytes = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Upstream replied");

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
