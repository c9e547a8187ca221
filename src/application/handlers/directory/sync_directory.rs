//! SyncDirectory - Query handler that keeps the member directory current.
//!
//! Mount and pull-to-refresh both go through the same fetch routine. The
//! state lock is never held across the network call; each fetch carries a
//! ticket and only the newest ticket may write its result back.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::Instrument;

use crate::domain::directory::{
    normalize_collection, DirectoryState, DirectoryView, FetchTrigger, ListChange, Member,
};
use crate::domain::foundation::RequestId;
use crate::ports::MemberCollection;
use crate::telemetry::flow_span;

/// What happened to one load or refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result replaced the member list.
    Applied(ListChange),
    /// A newer fetch started before this one finished; its result was dropped.
    Superseded,
    /// The request was not valid in the current phase and no fetch ran.
    Skipped,
}

/// Directory screen controller.
pub struct DirectorySync {
    collection: Arc<dyn MemberCollection>,
    state: RwLock<DirectoryState>,
}

impl DirectorySync {
    pub fn new(collection: Arc<dyn MemberCollection>) -> Self {
        Self {
            collection,
            state: RwLock::new(DirectoryState::new()),
        }
    }

    /// Initial fetch on screen mount.
    ///
    /// Skipped once the directory has settled; use `refresh` after that.
    pub async fn load(&self) -> FetchOutcome {
        self.run(FetchTrigger::Mount).await
    }

    /// User-initiated re-fetch.
    pub async fn refresh(&self) -> FetchOutcome {
        self.run(FetchTrigger::Refresh).await
    }

    /// Fetches and normalizes the collection without touching state.
    ///
    /// Never fails: transport and decode errors are logged and yield an
    /// empty list, the same as an empty directory.
    pub async fn fetch(&self) -> Vec<Member> {
        let request_id = RequestId::new();
        let result = self
            .collection
            .fetch_collection()
            .instrument(flow_span("directory", "fetch", request_id))
            .await;

        match result {
            Ok(body) => {
                let members = normalize_collection(&body);
                tracing::debug!(
                    request.id = %request_id,
                    count = members.len(),
                    "Directory fetched"
                );
                members
            }
            Err(e) => {
                tracing::error!(request.id = %request_id, "Directory fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Copy of the current state.
    pub async fn state(&self) -> DirectoryState {
        self.state.read().await.clone()
    }

    /// Current member list.
    pub async fn members(&self) -> Vec<Member> {
        self.state.read().await.members().to_vec()
    }

    /// Runs `render` against the current display projection.
    pub async fn view<R>(&self, render: impl FnOnce(&DirectoryView<'_>) -> R) -> R {
        let state = self.state.read().await;
        render(&state.view())
    }

    async fn run(&self, trigger: FetchTrigger) -> FetchOutcome {
        let begun = self.state.write().await.begin(trigger);
        let ticket = match begun {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::debug!(?trigger, "Directory fetch skipped: {}", e);
                return FetchOutcome::Skipped;
            }
        };

        let members = self.fetch().await;

        let applied = self.state.write().await.complete(ticket, members);
        match applied {
            Some(change) => FetchOutcome::Applied(change),
            None => {
                tracing::debug!(
                    generation = ticket.generation(),
                    "Discarding superseded directory fetch"
                );
                FetchOutcome::Superseded
            }
        }
    }
}
