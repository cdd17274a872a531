//! Mutation hook: fires only when executed.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::watch;
use tracing::{debug, error};

use crate::error::Result;
use crate::graphql::{operation_name, GraphQLClient};
use crate::slot::StateSlot;
use crate::state::{Action, RequestState};

/// Handle to one mutation's request state.
///
/// `V` is the variables type the mutation is executed with.
pub struct Mutation<T, V = serde_json::Value> {
    inner: Arc<MutationInner<T>>,
    _variables: PhantomData<fn(V)>,
}

struct MutationInner<T> {
    client: GraphQLClient,
    mutation: Arc<str>,
    slot: StateSlot<T>,
}

impl<T, V> Clone for Mutation<T, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _variables: PhantomData,
        }
    }
}

impl<T, V> Mutation<T, V>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    V: Serialize,
{
    pub fn new(client: &GraphQLClient, mutation: impl Into<String>) -> Self {
        let policy = client.config().overlap_policy;
        Self {
            inner: Arc::new(MutationInner {
                client: client.clone(),
                mutation: Arc::from(mutation.into()),
                slot: StateSlot::new(policy),
            }),
            _variables: PhantomData,
        }
    }

    pub fn mutation(&self) -> &str {
        &self.inner.mutation
    }

    /// Run one request cycle with the given variables.
    ///
    /// On failure the state is moved to the error phase first, then the
    /// error is returned so the caller can skip dependent work. Nothing is
    /// retried.
    pub async fn execute(&self, variables: Option<V>) -> Result<()> {
        let operation = operation_name(&self.inner.mutation).unwrap_or("anonymous");
        let ticket = self.inner.slot.begin();
        debug!(operation, seq = ticket.seq(), "Mutation cycle started");

        match self
            .inner
            .client
            .execute::<T, V>(&self.inner.mutation, variables.as_ref())
            .await
        {
            Ok(data) => {
                self.inner.slot.settle(ticket, Action::FetchSuccess(data));
                debug!(operation, seq = ticket.seq(), "Mutation cycle succeeded");
                Ok(())
            }
            Err(err) => {
                self.inner.slot.settle(ticket, Action::FetchError);
                error!(operation, error = %err, "Mutation failed");
                Err(err)
            }
        }
    }

    pub fn state(&self) -> RequestState<T> {
        self.inner.slot.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.inner.slot.subscribe()
    }
}

impl<T, V> std::fmt::Debug for Mutation<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mutation")
            .field("mutation", &operation_name(&self.inner.mutation))
            .field("slot", &self.inner.slot)
            .finish()
    }
}

/// Create a mutation handle. Nothing is sent until [`Mutation::execute`].
pub fn use_mutation<T, V>(client: &GraphQLClient, mutation: impl Into<String>) -> Mutation<T, V>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    V: Serialize,
{
    Mutation::new(client, mutation)
}
