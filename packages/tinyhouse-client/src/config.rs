//! Client configuration.
//!
//! The core never reads the environment. Binaries build a [`ClientConfig`]
//! from whatever source they own and inject it into [`GraphQLClient`](crate::GraphQLClient).

/// Same-origin path the GraphQL server is mounted on.
pub const API_PATH: &str = "/api";

/// Endpoint used when nothing else is configured (the local dev server).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/api";

/// How the HTTP transport treats non-2xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Parse the body as a GraphQL envelope whatever the status code.
    /// A GraphQL server answering 400 with `{ errors }` ends up as an
    /// application error; a non-JSON body ends up as `InvalidResponse`.
    #[default]
    ParseBody,
    /// Any non-2xx status is a transport failure (`ClientError::Http`).
    RejectNon2xx,
}

/// What happens when request cycles on the same hook overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Every cycle dispatches its terminal action; whichever settles last wins.
    #[default]
    LastSettled,
    /// Each cycle takes a sequence ticket when it starts. A terminal action
    /// from any cycle other than the most recently started one is dropped.
    LatestIssued,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub status_policy: StatusPolicy,
    pub overlap_policy: OverlapPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            status_policy: StatusPolicy::default(),
            overlap_policy: OverlapPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Endpoint at [`API_PATH`] on the given origin (`https://host:port`).
    pub fn for_origin(origin: &str) -> Self {
        Self::new(format!("{}{}", origin.trim_end_matches('/'), API_PATH))
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }
}
