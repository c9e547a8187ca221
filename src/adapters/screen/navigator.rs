//! Navigator adapters.

use std::sync::Mutex;

use tokio::sync::mpsc;

use crate::domain::navigation::NavigationEvent;
use crate::ports::Navigator;

/// Forwards navigation events to a router task over a channel.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<NavigationEvent>,
}

impl ChannelNavigator {
    /// Creates the navigator and the receiver the router consumes.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NavigationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, event: NavigationEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("Router is gone, dropping navigation to {}", event.target());
        }
    }
}

/// Records navigation events for assertions.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavigationEvent>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, event: NavigationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::Route;

    #[tokio::test]
    async fn channel_navigator_delivers_events() {
        let (navigator, mut rx) = ChannelNavigator::new();
        navigator.navigate(NavigationEvent::RegistrationSucceeded);

        let event = rx.recv().await.unwrap();
        assert_eq!(event.target(), Route::Directory);
    }

    #[test]
    fn channel_navigator_survives_closed_router() {
        let (navigator, rx) = ChannelNavigator::new();
        drop(rx);
        navigator.navigate(NavigationEvent::RegistrationSucceeded);
    }

    #[test]
    fn recording_navigator_keeps_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate(NavigationEvent::RegistrationSucceeded);
        assert_eq!(navigator.events(), vec![NavigationEvent::RegistrationSucceeded]);
        assert_eq!(navigator.count(), 1);
    }
}
