//! Query hook: fires on first use, refetches on demand.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::error::Result;
use crate::graphql::{operation_name, GraphQLClient};
use crate::slot::StateSlot;
use crate::state::{Action, RequestState};

/// Handle to one query's request state.
///
/// Clones share the same state slot, so a clone handed to a child view
/// refetches into the same state the parent renders. Cycles never return
/// errors to the caller; failures land in the state and the log.
pub struct Query<T> {
    inner: Arc<QueryInner<T>>,
}

struct QueryInner<T> {
    client: GraphQLClient,
    text: RwLock<Arc<str>>,
    /// Query text the automatic cycle last fired for
    activated: Mutex<Option<Arc<str>>>,
    slot: StateSlot<T>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Query<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Create the handle without firing anything.
    pub fn new(client: &GraphQLClient, query: impl Into<String>) -> Self {
        let policy = client.config().overlap_policy;
        Self {
            inner: Arc::new(QueryInner {
                client: client.clone(),
                text: RwLock::new(Arc::from(query.into())),
                activated: Mutex::new(None),
                slot: StateSlot::new(policy),
            }),
        }
    }

    pub fn query(&self) -> Arc<str> {
        Arc::clone(&self.inner.text.read())
    }

    /// Run the automatic cycle if it has not run for the current query text.
    ///
    /// Returns whether a cycle ran. Calling this on every render is the
    /// intended use: only the first call per query text does anything.
    pub async fn activate(&self) -> bool {
        let query = self.query();
        {
            let mut activated = self.inner.activated.lock();
            if activated.as_deref() == Some(&*query) {
                return false;
            }
            *activated = Some(query);
        }
        self.refetch().await;
        true
    }

    /// Swap the query text. Returns `true` if it changed.
    ///
    /// Does not fire; call [`activate`](Self::activate) afterwards, or use
    /// [`set_query`](Self::set_query) to do both.
    pub fn replace_query(&self, query: impl Into<String>) -> bool {
        let query: Arc<str> = Arc::from(query.into());
        let mut text = self.inner.text.write();
        if **text == *query {
            return false;
        }
        *text = query;
        true
    }

    /// Swap the query text and run a cycle if it changed.
    pub async fn set_query(&self, query: impl Into<String>) -> bool {
        self.replace_query(query);
        self.activate().await
    }

    /// Run one request cycle to completion.
    ///
    /// Overlapping calls all run and all dispatch; see
    /// [`OverlapPolicy`](crate::OverlapPolicy) for which result is kept.
    pub async fn refetch(&self) {
        if let Err(err) = self.cycle().await {
            let query = self.query();
            error!(
                operation = operation_name(&query).unwrap_or("anonymous"),
                error = %err,
                "Query failed"
            );
        }
    }

    /// Schedule [`refetch`](Self::refetch) on the current Tokio runtime.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn_refetch(&self) -> tokio::task::JoinHandle<()> {
        let query = self.clone();
        tokio::spawn(async move { query.refetch().await })
    }

    pub fn state(&self) -> RequestState<T> {
        self.inner.slot.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.inner.slot.subscribe()
    }

    async fn cycle(&self) -> Result<()> {
        let query = self.query();
        let operation = operation_name(&query).unwrap_or("anonymous");
        let ticket = self.inner.slot.begin();
        debug!(operation, seq = ticket.seq(), "Query cycle started");

        match self.inner.client.execute::<T, ()>(&query, None).await {
            Ok(data) => {
                self.inner.slot.settle(ticket, Action::FetchSuccess(data));
                debug!(operation, seq = ticket.seq(), "Query cycle succeeded");
                Ok(())
            }
            Err(err) => {
                self.inner.slot.settle(ticket, Action::FetchError);
                Err(err)
            }
        }
    }
}

impl<T> std::fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("query", &operation_name(&self.inner.text.read()))
            .field("slot", &self.inner.slot)
            .finish()
    }
}

/// Create a query handle and fire its first cycle on the Tokio runtime.
///
/// Must be called from within a runtime. The returned handle starts in the
/// idle state; subscribe to it to observe the cycle.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_query<T>(client: &GraphQLClient, query: impl Into<String>) -> Query<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let handle = Query::new(client, query);
    let first = handle.clone();
    tokio::spawn(async move {
        first.activate().await;
    });
    handle
}
