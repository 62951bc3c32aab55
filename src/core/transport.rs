//! HTTP transport seam.
//!
//! The client only needs a status code and a body, so both the server
//! (`reqwest`) and the browser (`gloo-net`) backends reduce responses to
//! [`RawResponse`]. Tests plug in scripted transports.

use serde::Serialize;
use thiserror::Error;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse, TransportError>;

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<RawResponse, TransportError>;
}

#[cfg(feature = "ssr")]
pub use server::ReqwestTransport;

#[cfg(not(feature = "ssr"))]
pub use browser::GlooTransport;

/// Transport used by the running application for the active feature set.
#[cfg(feature = "ssr")]
pub type DefaultTransport = ReqwestTransport;
#[cfg(not(feature = "ssr"))]
pub type DefaultTransport = GlooTransport;

#[cfg(feature = "ssr")]
mod server {
    use super::*;

    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        async fn finish(
            response: Result<reqwest::Response, reqwest::Error>,
        ) -> Result<RawResponse, TransportError> {
            let response = response.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
    }

    impl Transport for ReqwestTransport {
        async fn get(
            &self,
            url: &str,
            query: &[(&str, &str)],
        ) -> Result<RawResponse, TransportError> {
            Self::finish(self.client.get(url).query(query).send().await).await
        }

        async fn post_json<B: Serialize + ?Sized>(
            &self,
            url: &str,
            query: &[(&str, &str)],
            body: &B,
        ) -> Result<RawResponse, TransportError> {
            Self::finish(self.client.post(url).query(query).json(body).send().await).await
        }
    }
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use super::*;
    use gloo_net::http::Request;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct GlooTransport;

    impl GlooTransport {
        pub fn new() -> Self {
            Self
        }

        async fn finish(
            response: Result<gloo_net::http::Response, gloo_net::Error>,
        ) -> Result<RawResponse, TransportError> {
            let response = response.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
    }

    impl Transport for GlooTransport {
        async fn get(
            &self,
            url: &str,
            query: &[(&str, &str)],
        ) -> Result<RawResponse, TransportError> {
            Self::finish(Request::get(url).query(query.iter().copied()).send().await).await
        }

        async fn post_json<B: Serialize + ?Sized>(
            &self,
            url: &str,
            query: &[(&str, &str)],
            body: &B,
        ) -> Result<RawResponse, TransportError> {
            let request = Request::post(url)
                .query(query.iter().copied())
                .json(body)
                .map_err(|e| TransportError(e.to_string()))?;
            Self::finish(request.send().await).await
        }
    }
}
