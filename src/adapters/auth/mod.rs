//! Identity adapters.
//!
//! Implementations of the `IdentityProvider` and `SessionExchange` ports:
//!
//! - `identity_toolkit` - Production credential exchange over REST
//! - `token_source` - Terminal token sources (stdin, pre-issued token)
//! - `mock` - Test implementations that don't require external services

mod identity_toolkit;
mod mock;
mod token_source;

pub use identity_toolkit::{IdentityToolkitConfig, IdentityToolkitExchange};
pub use mock::{MockIdentityProvider, MockSessionExchange};
pub use token_source::{LineTokenProvider, StaticTokenProvider};
