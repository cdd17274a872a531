//! GraphQL-over-HTTP request and response envelopes.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// GraphQL request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphQLRequest {
    /// Build a request, rejecting blank query text.
    pub fn new(query: impl Into<String>) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ClientError::EmptyQuery);
        }
        Ok(Self {
            query,
            variables: None,
        })
    }

    /// Attach caller-defined variables. `None` leaves the field off the wire.
    pub fn with_variables<V: Serialize>(mut self, variables: Option<&V>) -> Result<Self> {
        self.variables = variables.map(serde_json::to_value).transpose()?;
        Ok(self)
    }

    pub fn operation_name(&self) -> Option<&str> {
        operation_name(&self.query)
    }
}

/// GraphQL response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLResponse<T = Value> {
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    pub fn with_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: None,
            errors: Some(errors),
        }
    }

    /// The `errors` list, if the server sent a non-empty one.
    pub fn application_errors(&self) -> Option<&[GraphQLError]> {
        self.errors.as_deref().filter(|errors| !errors.is_empty())
    }

    /// Classify the envelope: any application error wins over `data`, and
    /// an envelope with neither is [`ClientError::NoData`].
    pub fn into_result(self) -> Result<T> {
        if let Some(errors) = self.application_errors() {
            return Err(ClientError::GraphQL {
                message: errors[0].message.clone(),
                count: errors.len(),
            });
        }
        self.data.ok_or(ClientError::NoData)
    }
}

impl GraphQLResponse<Value> {
    /// Deserialize `data` into the caller's type. A JSON `null` stays `None`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<GraphQLResponse<T>> {
        let data = match self.data {
            Some(Value::Null) | None => None,
            Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(GraphQLResponse {
            data,
            errors: self.errors,
        })
    }
}

/// GraphQL error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<GraphQLErrorLocation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLErrorLocation {
    pub line: i32,
    pub column: i32,
}

/// One step of an error `path`: a field name or a list index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Name of the first operation in a document, e.g. `Listings` for
/// `query Listings { ... }`. Anonymous operations yield `None`.
pub fn operation_name(document: &str) -> Option<&str> {
    let is_name_char = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let document = document.trim_start();
    let after = ["query", "mutation", "subscription"]
        .into_iter()
        .find_map(|keyword| document.strip_prefix(keyword))
        .filter(|rest| !rest.starts_with(is_name_char))?
        .trim_start();
    let end = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());
    Some(&after[..end]).filter(|name| !name.is_empty())
}
