//! Screen boundary adapters.
//!
//! Implementations of the `Navigator` and `Notifier` ports for a terminal
//! front end, plus recording doubles for tests.

mod navigator;
mod notifier;

pub use navigator::{ChannelNavigator, RecordingNavigator};
pub use notifier::{ConsoleNotifier, RecordingNotifier, TracingNotifier};
