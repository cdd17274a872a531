//! TinyHouse listings client.
//!
//! The data-fetching layer behind the listings views: a GraphQL-over-HTTP
//! transport, a small request state machine, and two hooks built on it.
//!
//! - [`Query`] fires once when first used and exposes `refetch`.
//! - [`Mutation`] fires only when `execute` is called.
//!
//! Both move through the same three flags (`data`, `loading`, `error`) via
//! [`reduce`], and both classify GraphQL `errors` the same way as network
//! failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use tinyhouse_client::{
//!     use_mutation, use_query, ClientConfig, DeleteListingData, DeleteListingVariables,
//!     GraphQLClient, ListingsData, DELETE_LISTING, LISTINGS,
//! };
//!
//! let client = GraphQLClient::new(ClientConfig::default());
//! let listings = use_query::<ListingsData>(&client, LISTINGS);
//! let delete = use_mutation::<DeleteListingData, DeleteListingVariables>(&client, DELETE_LISTING);
//!
//! if delete.execute(Some(DeleteListingVariables { id: "5e52".into() })).await.is_ok() {
//!     listings.refetch().await;
//! }
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod hooks;
pub mod slot;
pub mod state;
pub mod types;

pub use config::{ClientConfig, OverlapPolicy, StatusPolicy, API_PATH, DEFAULT_ENDPOINT};
pub use error::{ClientError, Result};
pub use graphql::*;
pub use hooks::*;
pub use slot::{StateSlot, Ticket};
pub use state::{reduce, Action, Phase, RequestState};
pub use types::*;
