//! In-memory collection endpoint for testing.
//!
//! Fetches are answered from a script queue, falling back to a default
//! body. A scripted fetch can be gated so tests decide when (and in which
//! order) concurrent requests resolve.
//!
//! # Example
//!
//! ```ignore
//! let collection = MockMemberCollection::new().with_body(json!([{ "Name": "A" }]));
//! let release = collection.gate_fetch();
//! // ... start a fetch, then:
//! release.send(Ok(json!([]))).unwrap();
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::domain::registration::RegistrationPayload;
use crate::ports::{CollectionError, MemberCollection};

type FetchResult = Result<Value, CollectionError>;

enum ScriptedFetch {
    Ready(FetchResult),
    Gated(oneshot::Receiver<FetchResult>),
}

/// Mock collection endpoint.
pub struct MockMemberCollection {
    default_body: RwLock<Value>,
    script: Mutex<VecDeque<ScriptedFetch>>,
    create_result: RwLock<Result<(), CollectionError>>,
    created: Mutex<Vec<RegistrationPayload>>,
    create_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl Default for MockMemberCollection {
    fn default() -> Self {
        Self {
            default_body: RwLock::new(Value::Array(Vec::new())),
            script: Mutex::new(VecDeque::new()),
            create_result: RwLock::new(Ok(())),
            created: Mutex::new(Vec::new()),
            create_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }
}

impl MockMemberCollection {
    /// Creates a mock that accepts every account and lists nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the body returned by unscripted fetches.
    pub fn with_body(self, body: Value) -> Self {
        *self.default_body.write().unwrap() = body;
        self
    }

    /// Makes every account creation fail with the given error.
    pub fn with_create_error(self, error: CollectionError) -> Self {
        *self.create_result.write().unwrap() = Err(error);
        self
    }

    /// Queues an immediate answer for the next unanswered fetch.
    pub fn push_fetch(&self, result: FetchResult) {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedFetch::Ready(result));
    }

    /// Queues a held fetch; it resolves when the returned sender fires.
    ///
    /// Dropping the sender resolves the fetch with a network error.
    pub fn gate_fetch(&self) -> oneshot::Sender<FetchResult> {
        let (tx, rx) = oneshot::channel();
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedFetch::Gated(rx));
        tx
    }

    /// Payloads received by `create_member`, in order.
    pub fn created(&self) -> Vec<RegistrationPayload> {
        self.created.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Total network calls of either kind.
    pub fn total_calls(&self) -> usize {
        self.create_calls() + self.fetch_calls()
    }
}

#[async_trait]
impl MemberCollection for MockMemberCollection {
    async fn create_member(&self, payload: &RegistrationPayload) -> Result<(), CollectionError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push(payload.clone());
        self.create_result.read().unwrap().clone()
    }

    async fn fetch_collection(&self) -> Result<Value, CollectionError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(ScriptedFetch::Ready(result)) => result,
            Some(ScriptedFetch::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(CollectionError::network("gate dropped"))),
            None => {
                let body = self.default_body.read().unwrap().clone();
                Ok(body)
            }
        }
    }
}
