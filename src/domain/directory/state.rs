//! Directory screen state and its fetch lifecycle.
//!
//! `loading` and `refreshing` are derived from a single phase, so they
//! can never both be true. Each fetch takes a ticket carrying a
//! generation number; only the newest ticket may write its result back.

use crate::domain::foundation::{StateMachine, ValidationError};

use super::{DirectoryView, ListChange, Member};

/// Lifecycle phase of the directory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryPhase {
    /// Before the first fetch resolves.
    #[default]
    Loading,
    /// Settled; members reflect the latest applied fetch.
    Idle,
    /// A user-triggered re-fetch is in flight.
    Refreshing,
}

impl StateMachine for DirectoryPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DirectoryPhase::*;
        matches!(
            (self, target),
            (Loading, Loading)
                | (Loading, Idle)
                | (Loading, Refreshing)
                | (Idle, Refreshing)
                | (Refreshing, Refreshing)
                | (Refreshing, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DirectoryPhase::*;
        match self {
            Loading => vec![Loading, Idle, Refreshing],
            Idle => vec![Refreshing],
            Refreshing => vec![Refreshing, Idle],
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DirectoryPhase::Loading => "loading",
            DirectoryPhase::Idle => "idle",
            DirectoryPhase::Refreshing => "refreshing",
        }
    }
}

/// What started a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    /// Screen mount.
    Mount,
    /// Pull-to-refresh.
    Refresh,
}

impl FetchTrigger {
    fn phase(&self) -> DirectoryPhase {
        match self {
            FetchTrigger::Mount => DirectoryPhase::Loading,
            FetchTrigger::Refresh => DirectoryPhase::Refreshing,
        }
    }
}

/// Proof that a fetch was started; required to apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    trigger: FetchTrigger,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn trigger(&self) -> FetchTrigger {
        self.trigger
    }
}

/// Members plus the fetch lifecycle of the directory screen.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    members: Vec<Member>,
    phase: DirectoryPhase,
    generation: u64,
}

impl DirectoryState {
    /// Fresh state: no members, loading.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn phase(&self) -> DirectoryPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == DirectoryPhase::Loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase == DirectoryPhase::Refreshing
    }

    /// Generation of the newest fetch started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a fetch, superseding any fetch already in flight.
    ///
    /// A mount trigger is rejected once the first fetch has resolved.
    pub fn begin(&mut self, trigger: FetchTrigger) -> Result<FetchTicket, ValidationError> {
        self.phase = self.phase.transition_to(trigger.phase())?;
        self.generation += 1;
        Ok(FetchTicket {
            generation: self.generation,
            trigger,
        })
    }

    /// Applies a fetch result if its ticket is still the newest one.
    ///
    /// The member list is replaced wholesale. Returns `None` for a stale
    /// ticket, in which case nothing changes.
    pub fn complete(&mut self, ticket: FetchTicket, members: Vec<Member>) -> Option<ListChange> {
        if ticket.generation != self.generation {
            return None;
        }

        let change = ListChange::between(&self.members, &members);
        self.members = members;
        self.phase = DirectoryPhase::Idle;
        Some(change)
    }

    /// Display projection of the current state.
    pub fn view(&self) -> DirectoryView<'_> {
        if self.is_loading() {
            DirectoryView::Loading
        } else {
            DirectoryView::ready(&self.members, self.is_refreshing())
        }
    }
}
