//! Navigation boundary port.

use crate::domain::navigation::NavigationEvent;

/// Hands navigation events to the external router.
///
/// Fire-and-forget: the core does not wait for or observe the transition.
pub trait Navigator: Send + Sync {
    fn navigate(&self, event: NavigationEvent);
}
