//! Transport seam: one GraphQL envelope in, one envelope out.

use std::sync::Arc;

use async_trait::async_trait;

use super::envelope::{GraphQLRequest, GraphQLResponse};
use crate::config::{ClientConfig, StatusPolicy};
use crate::error::{ClientError, Result};

/// Sends a single GraphQL request and returns the parsed envelope.
///
/// Implementations make exactly one round trip per call. They do not
/// retry, cache, or coalesce identical requests, and they do not look
/// inside the envelope: classifying `errors` is the caller's job.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &GraphQLRequest) -> Result<GraphQLResponse>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &GraphQLRequest) -> Result<GraphQLResponse> {
        (**self).send(request).await
    }
}

/// HTTP POST transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    status_policy: StatusPolicy,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, status_policy: StatusPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            status_policy,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.endpoint.clone(), config.status_policy)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for HttpTransport {
    async fn send(&self, request: &GraphQLRequest) -> Result<GraphQLResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() && self.status_policy == StatusPolicy::RejectNon2xx {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ClientError::InvalidResponse {
            status: status.as_u16(),
            source,
        })
    }
}
