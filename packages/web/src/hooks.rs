//! Dioxus bindings for the request hooks.
//!
//! Each hook owns a core handle for the lifetime of the component and
//! mirrors its state into a signal, so a settled request re-renders the
//! component that called the hook.

use dioxus::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use tinyhouse_client::{GraphQLClient, Mutation, Query, RequestState, Result};
use tokio::sync::watch;

/// Copy every state change from the core slot into `signal`.
///
/// The task is scoped to the calling component and stops when it unmounts.
fn mirror<T: Clone + 'static>(
    mut rx: watch::Receiver<RequestState<T>>,
    mut signal: Signal<RequestState<T>>,
) -> Task {
    spawn(async move {
        while rx.changed().await.is_ok() {
            let next = rx.borrow_and_update().clone();
            signal.set(next);
        }
    })
}

/// Query state plus a refetch handle.
pub struct UseQuery<T: 'static> {
    handle: Query<T>,
    state: Signal<RequestState<T>>,
}

impl<T: 'static> Clone for UseQuery<T> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            state: self.state,
        }
    }
}

impl<T> UseQuery<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn state(&self) -> RequestState<T> {
        self.state.cloned()
    }

    /// Run another cycle in the background. Failures land in the state.
    pub fn refetch(&self) {
        let handle = self.handle.clone();
        spawn(async move {
            handle.refetch().await;
        });
    }
}

/// Query that fires once on mount, and again whenever `query` changes.
pub fn use_query<T>(query: &str) -> UseQuery<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let client = use_context::<GraphQLClient>();
    let handle = use_hook(|| Query::<T>::new(&client, query));
    let state = use_signal(|| handle.state());
    use_hook(|| mirror(handle.subscribe(), state));

    let activation = handle.clone();
    use_effect(use_reactive((query.to_string(),), move |(query,)| {
        let handle = activation.clone();
        handle.replace_query(query);
        spawn(async move {
            handle.activate().await;
        });
    }));

    UseQuery { handle, state }
}

/// Mutation state plus an execute handle.
pub struct UseMutation<T: 'static, V: 'static> {
    handle: Mutation<T, V>,
    state: Signal<RequestState<T>>,
}

impl<T: 'static, V: 'static> Clone for UseMutation<T, V> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            state: self.state,
        }
    }
}

impl<T, V> UseMutation<T, V>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    V: Serialize + 'static,
{
    pub fn state(&self) -> RequestState<T> {
        self.state.cloned()
    }

    /// Send the mutation. Resolves to `Err` when it failed, after the
    /// state has already moved to the error phase.
    pub async fn execute(&self, variables: Option<V>) -> Result<()> {
        self.handle.execute(variables).await
    }
}

/// Mutation that only fires when [`UseMutation::execute`] is called.
pub fn use_mutation<T, V>(mutation: &str) -> UseMutation<T, V>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    V: Serialize + 'static,
{
    let client = use_context::<GraphQLClient>();
    let handle = use_hook(|| Mutation::<T, V>::new(&client, mutation));
    let state = use_signal(|| handle.state());
    use_hook(|| mirror(handle.subscribe(), state));

    UseMutation { handle, state }
}
