//! GraphQL transport, client, and the documents the listings client sends

mod client;
mod envelope;
mod mutations;
mod queries;
mod transport;

pub use client::*;
pub use envelope::*;
pub use mutations::*;
pub use queries::*;
pub use transport::*;
