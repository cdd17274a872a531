//! Request hooks binding the state machine to GraphQL documents

mod mutation;
mod query;

pub use mutation::*;
pub use query::*;
