//! GraphQL client for making requests to the API server

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::envelope::{GraphQLRequest, GraphQLResponse};
use super::transport::{HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::hooks::{Mutation, Query};

/// GraphQL client shared by every hook in the application.
///
/// Construct one at startup and hand clones to whatever needs it; clones
/// share the transport. There is no process-wide instance.
#[derive(Clone)]
pub struct GraphQLClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl GraphQLClient {
    /// Create a client that talks HTTP to `config.endpoint`
    pub fn new(config: ClientConfig) -> Self {
        let transport = HttpTransport::from_config(&config);
        Self::with_transport(transport, config)
    }

    /// Create a client over any transport (test doubles, alternate backends)
    pub fn with_transport(transport: impl Transport + 'static, config: ClientConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query handle on this client. Nothing fires until it is activated.
    pub fn query_handle<T>(&self, query: impl Into<String>) -> Query<T>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        Query::new(self, query)
    }

    pub fn mutation_handle<T, V>(&self, mutation: impl Into<String>) -> Mutation<T, V>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
        V: Serialize,
    {
        Mutation::new(self, mutation)
    }

    /// Send one request and return the raw envelope with `data` typed.
    ///
    /// Application errors are left in the envelope for the caller to inspect.
    pub async fn send<T, V>(&self, query: &str, variables: Option<&V>) -> Result<GraphQLResponse<T>>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        self.round_trip(query, variables).await?.decode()
    }

    /// Send one request and classify the envelope.
    ///
    /// A non-empty `errors` list becomes [`ClientError::GraphQL`] carrying the
    /// first message, even when partial `data` came back alongside it.
    pub async fn execute<T, V>(&self, query: &str, variables: Option<&V>) -> Result<T>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        let raw = self.round_trip(query, variables).await?;
        let data = raw.into_result()?;
        Ok(serde_json::from_value(data)?)
    }

    async fn round_trip<V: Serialize>(&self, query: &str, variables: Option<&V>) -> Result<GraphQLResponse> {
        let request = GraphQLRequest::new(query)?.with_variables(variables)?;
        debug!(
            operation = request.operation_name().unwrap_or("anonymous"),
            has_variables = request.variables.is_some(),
            "Sending GraphQL request"
        );
        self.transport.send(&request).await
    }
}

impl std::fmt::Debug for GraphQLClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
