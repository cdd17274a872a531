// Common test utilities

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tinyhouse_client::{
    ClientConfig, ClientError, GraphQLClient, GraphQLRequest, GraphQLResponse, Listing,
    RequestState, Result, Transport,
};
use tokio::sync::{oneshot, watch};
use tracing_subscriber::fmt::MakeWriter;

pub const TIMEOUT: Duration = Duration::from_secs(5);

// ============================================================================
// Fixtures
// ============================================================================

pub fn listing(id: &str, title: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        image: format!("https://img.example/{}.jpg", id),
        address: format!("{} Lakeshore Dr", id),
        price: 12000,
        num_of_guests: 4,
        num_of_beds: 2,
        num_of_baths: 1,
        rating: 4.5,
    }
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing("1", "Cabin"),
        listing("5e52", "Treehouse"),
        listing("7", "Yurt"),
    ]
}

pub fn client_for(transport: impl Transport + 'static) -> GraphQLClient {
    GraphQLClient::with_transport(transport, ClientConfig::default())
}

/// Wait until the hook state satisfies `done`, failing the test on timeout.
pub async fn settle<T: Clone>(
    mut rx: watch::Receiver<RequestState<T>>,
    done: impl FnMut(&RequestState<T>) -> bool,
) -> RequestState<T> {
    let state = tokio::time::timeout(TIMEOUT, rx.wait_for(done))
        .await
        .expect("timed out waiting for request state")
        .expect("state slot dropped");
    state.clone()
}

// ============================================================================
// In-memory listings backend
// ============================================================================

/// Deterministic GraphQL backend over an in-memory listing store.
///
/// Dispatches on the operation name of each request, the way the real
/// server resolves the documents the client sends.
pub struct ListingsBackend {
    listings: Mutex<Vec<Listing>>,
    requests: Mutex<Vec<GraphQLRequest>>,
    offline: Mutex<bool>,
}

impl ListingsBackend {
    pub fn new(listings: Vec<Listing>) -> Arc<Self> {
        Arc::new(Self {
            listings: Mutex::new(listings),
            requests: Mutex::new(Vec::new()),
            offline: Mutex::new(false),
        })
    }

    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock() = offline;
    }

    pub fn requests(&self) -> Vec<GraphQLRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn ids(&self) -> Vec<String> {
        self.listings.lock().iter().map(|l| l.id.clone()).collect()
    }

    fn resolve(&self, request: &GraphQLRequest) -> Value {
        let id = request
            .variables
            .as_ref()
            .and_then(|v| v.get("id"))
            .and_then(Value::as_str);

        match (request.operation_name(), id) {
            (Some("Listings"), _) => {
                let listings = self.listings.lock().clone();
                json!({ "data": { "listings": listings } })
            }
            (Some("DeleteListing"), Some(id)) => {
                let mut listings = self.listings.lock();
                match listings.iter().position(|l| l.id == id) {
                    Some(index) => {
                        let deleted = listings.remove(index);
                        json!({ "data": { "deleteListing": deleted } })
                    }
                    None => json!({
                        "data": null,
                        "errors": [{ "message": "failed to delete listing", "path": ["deleteListing"] }]
                    }),
                }
            }
            (Some("DeleteListing"), None) => json!({
                "errors": [{ "message": "Variable \"$id\" of required type \"ID!\" was not provided." }]
            }),
            (Some("LogIn"), _) => json!({
                "data": { "logIn": {
                    "id": "viewer-1",
                    "token": "token-abc",
                    "avatar": "https://img.example/viewer.png",
                    "hasWallet": false,
                    "didRequest": true
                } }
            }),
            (Some("LogOut"), _) => json!({
                "data": { "logOut": {
                    "id": null, "token": null, "avatar": null, "hasWallet": null, "didRequest": true
                } }
            }),
            _ => json!({ "errors": [{ "message": "Unknown operation" }] }),
        }
    }
}

#[async_trait]
impl Transport for ListingsBackend {
    async fn send(&self, request: &GraphQLRequest) -> Result<GraphQLResponse> {
        self.requests.lock().push(request.clone());
        if *self.offline.lock() {
            return Err(ClientError::Transport("connection refused".into()));
        }
        Ok(serde_json::from_value(self.resolve(request))?)
    }
}

// ============================================================================
// Scripted transport
// ============================================================================

enum Reply {
    Envelope(Value),
    Offline,
}

struct Step {
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

/// Transport that answers from a queue of canned replies.
///
/// Gated replies are held until the returned sender fires, which lets a
/// test decide the order in which overlapping requests settle.
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<GraphQLRequest>>,
    seen: watch::Sender<usize>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        let (seen, _) = watch::channel(0);
        Arc::new(Self {
            steps: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            seen,
        })
    }

    pub fn reply(&self, envelope: Value) {
        self.push(Reply::Envelope(envelope), None);
    }

    pub fn reply_offline(&self) {
        self.push(Reply::Offline, None);
    }

    /// Queue a reply that is only delivered once the returned sender fires.
    pub fn reply_gated(&self, envelope: Value) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.push(Reply::Envelope(envelope), Some(gate));
        release
    }

    pub fn reply_offline_gated(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.push(Reply::Offline, Some(gate));
        release
    }

    pub fn requests(&self) -> Vec<GraphQLRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        *self.seen.borrow()
    }

    /// Wait until at least `n` requests have reached the transport.
    pub async fn wait_for_requests(&self, n: usize) {
        let mut rx = self.seen.subscribe();
        tokio::time::timeout(TIMEOUT, rx.wait_for(|seen| *seen >= n))
            .await
            .expect("timed out waiting for requests")
            .expect("transport dropped");
    }

    fn push(&self, reply: Reply, gate: Option<oneshot::Receiver<()>>) {
        self.steps.lock().push_back(Step { reply, gate });
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &GraphQLRequest) -> Result<GraphQLResponse> {
        self.requests.lock().push(request.clone());
        let step = self.steps.lock().pop_front();
        self.seen.send_modify(|seen| *seen += 1);

        let step = step.ok_or_else(|| ClientError::Transport("no scripted reply left".into()))?;
        if let Some(gate) = step.gate {
            let _ = gate.await;
        }
        match step.reply {
            Reply::Envelope(envelope) => Ok(serde_json::from_value(envelope)?),
            Reply::Offline => Err(ClientError::Transport("connection refused".into())),
        }
    }
}

// ============================================================================
// Log capture
// ============================================================================

/// Collects formatted tracing output for the current thread.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Route this thread's tracing output into the capture until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// ============================================================================
// HTTP stub server
// ============================================================================

/// Serve `router` on an ephemeral local port and return its `/api` URL.
pub async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{}/api", addr)
}
