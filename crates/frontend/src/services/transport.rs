//! Fetch-backed transport.

use auth_client::{HttpResponse, Transport, TransportError};
use gloo_net::http::Request;
use serde::Serialize;

/// Sends requests through the browser's fetch API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<HttpResponse, TransportError> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
