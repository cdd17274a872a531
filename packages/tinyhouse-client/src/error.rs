//! Error types for the TinyHouse GraphQL client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Everything that can end a request cycle in the error phase.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network error (connection refused, DNS, TLS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response, only raised under [`StatusPolicy::RejectNon2xx`](crate::StatusPolicy)
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body was not a GraphQL JSON envelope
    #[error("Invalid response body (HTTP {status}): {source}")]
    InvalidResponse {
        status: u16,
        source: serde_json::Error,
    },

    /// The envelope carried a non-empty `errors` list. Only the first
    /// message is kept; `count` records how many the server sent.
    #[error("GraphQL error: {message}")]
    GraphQL { message: String, count: usize },

    /// Envelope had neither `data` nor `errors`
    #[error("No data returned")]
    NoData,

    /// Variables failed to serialize, or `data` did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Query text is empty")]
    EmptyQuery,

    /// Failure reported by a non-HTTP transport
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ClientError {
    /// True when the server answered with GraphQL application errors.
    pub fn is_application(&self) -> bool {
        matches!(self, ClientError::GraphQL { .. })
    }

    /// True when the request never produced a usable envelope.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Network(_)
                | ClientError::Http { .. }
                | ClientError::InvalidResponse { .. }
                | ClientError::Transport(_)
        )
    }
}
